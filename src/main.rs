//! projtrack main entrypoint.

use projtrack::run;
use projtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
