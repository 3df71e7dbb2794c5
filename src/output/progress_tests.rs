use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(true);
    progress.inc();
    progress.inc();
    progress.finish();
}

#[test]
fn counts_entries() {
    let progress = ScanProgress::new_with_visibility(true, false);
    for _ in 0..10 {
        progress.inc();
    }
    assert_eq!(progress.position(), 10);
    progress.finish();
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::new(true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.position(), 2);
}

#[test]
fn visible_spinner_can_be_created() {
    let progress = ScanProgress::new_with_visibility(false, true);
    progress.inc();
    progress.finish();
}
