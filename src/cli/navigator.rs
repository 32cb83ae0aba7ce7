use samaysetu_auth::{LOGIN_PATH, Navigator, TracingNavigator};

/// Prints where the web client would have gone.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        TracingNavigator.navigate(path);
        if path == LOGIN_PATH {
            eprintln!("\n🔒 Session ended, redirected to {}. Run `samaysetu-cli login` to sign in again.", path);
        } else {
            println!("➡️  Landing page: {}", path);
        }
    }
}
