#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(rust_2018_idioms, unused_lifetimes, missing_debug_implementations)]
#![cfg_attr(feature = "nightly", feature(test))]

//! Crate for a writer that prefixes every line written through it,
//! even when a write contains multiple lines or a line is split across
//! multiple writes.
//!
//! The writer can be shared between threads. Every call to
//! [`Write::write`](std::io::Write::write) holds a lock for its whole
//! duration, so the output of concurrent producers never interleaves
//! inside a single call.
//!
//! ```
//! use std::io::Write;
//!
//! use sync_prefix_writer::PrefixWriter;
//!
//! let mut writer = PrefixWriter::new("> ", Vec::new());
//!
//! writer.write_all(b"hello")?;
//! writer.write_all(b" world\nsecond\n")?;
//!
//! assert_eq!(b"> hello world\n> second\n", writer.into_inner().as_slice());
//! # Ok::<(), std::io::Error>(())
//! ```

mod prefix_writer;

pub use prefix_writer::PrefixWriter;
