use std::{
    io::Write,
    thread,
};

use sync_prefix_writer::PrefixWriter;

fn main() -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handler = stdout.lock();
    let mut writer = PrefixWriter::new("basic-example: ", &mut handler);

    writeln!(&mut writer, "I am prefixed")?;
    write!(&mut writer, "I am split ")?;
    writeln!(&mut writer, "across two writes\n\nand empty lines stay empty")?;

    let mut nested = PrefixWriter::new("nested: ", &mut writer);
    writeln!(&mut nested, "I have two prefixes")?;

    drop(nested);
    drop(writer);
    drop(handler);

    let shared = PrefixWriter::new("threaded: ", std::io::stdout());
    thread::scope(|scope| {
        let handles = (0..3)
            .map(|worker| {
                let mut writer = &shared;
                scope.spawn(move || {
                    writer.write_all(format!("hello from worker {worker}\n").as_bytes())
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter().try_for_each(|handle| {
            handle.join().unwrap_or_else(|_| {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "worker panicked",
                ))
            })
        })
    })?;

    (&shared).flush()
}
