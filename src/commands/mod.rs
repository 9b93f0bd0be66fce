pub mod delete;
pub mod events;
pub mod member;
pub mod members;
pub mod rsvp;
pub mod set;
pub mod show;
pub mod whoami;

use std::time::Duration;

use indicatif::ProgressBar;

/// Spinner shown around network calls. No timeout is enforced anywhere, so a
/// hung request hangs the spinner.
pub fn create_spinner(msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(msg.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
