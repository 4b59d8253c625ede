// Logging setup. Info and above print the bare message; debug and trace
// records carry their level and source location.

use std::io::Write;

/// Install the global logger at `info`, or whatever `RUST_LOG` asks for.
pub fn init() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    .format(|buf, record| {
        if record.level() <= log::Level::Info {
            writeln!(buf, "{}", record.args())
        } else {
            let mut target = record.target().to_string();
            if let Some(line_no) = record.line() {
                target.push(':');
                target.push_str(&line_no.to_string());
            }
            writeln!(buf, "{} - {} - {}", record.level(), target, record.args())
        }
    })
    .try_init();

    if let Err(e) = result {
        eprintln!("logger already initialised: {}", e);
    }
}
