//! SoccerNet informational step.
//!
//! The SoccerNet tracking dataset runs to hundreds of gigabytes, so nothing
//! is fetched automatically; this step only prints the manual acquisition
//! instructions. No network, no disk I/O, never fails.

/// Fixed guidance lines for fetching the SoccerNet tracking data by hand.
pub fn soccernet_notice() -> Vec<String> {
    vec![
        "SoccerNet is the current academic standard (CVPR/ICCV).".into(),
        "To fetch its tracking data (Challenge 2022), run in a terminal:".into(),
        "  pip install SoccerNet".into(),
        concat!(
            "  python -c 'from SoccerNet.Downloader import SoccerNetDownloader; ",
            "myDL = SoccerNetDownloader(LocalDirectory=\"data/external/soccernet\"); ",
            "myDL.downloadDataTask(task=\"tracking\", split=[\"train\", \"test\", \"challenge\"])'"
        )
        .into(),
        "Warning: this can download more than 100GB of data.".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_names_the_manual_download_command() {
        let lines = soccernet_notice();
        assert!(lines.iter().any(|l| l.contains("pip install SoccerNet")));
        assert!(lines.iter().any(|l| l.contains("downloadDataTask")));
    }
}
