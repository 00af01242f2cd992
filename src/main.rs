//! shiftclock main entrypoint.

use shiftclock::run;
use shiftclock::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
