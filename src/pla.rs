//! PLA (Programmable Logic Array) output
//!
//! Writes a minimized cover as a single-output table in the Berkeley PLA format
//! read by most logic synthesis tools:
//!
//! ```text
//! .i 3
//! .o 1
//! .ilb A B C
//! .ob F
//! .p 3
//! -11 1
//! 1-1 1
//! 11- 1
//! .e
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::minimizer::Solution;

/// Name of the single output in written tables
const OUTPUT_LABEL: &str = "F";

/// Trait for types that can be written in PLA format
pub trait PLAWriter {
    /// Write this cover to PLA format using a writer
    ///
    /// This is the core serialization method; `to_pla_string` and
    /// `to_pla_file` delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Convert this cover to a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{Minimizer, PLAWriter};
    ///
    /// let solution = Minimizer::new(2, &[0, 1], &[]).unwrap().minimize().unwrap();
    /// let pla = solution.to_pla_string().unwrap();
    /// assert_eq!(pla, ".i 2\n.o 1\n.ilb A B\n.ob F\n.p 1\n0- 1\n.e\n");
    /// ```
    fn to_pla_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write this cover to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()
    }
}

impl PLAWriter for Solution {
    fn write_pla<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, ".i {}", self.num_vars())?;
        writeln!(writer, ".o 1")?;

        write!(writer, ".ilb")?;
        for label in self.labels().as_slice() {
            write!(writer, " {}", label)?;
        }
        writeln!(writer)?;
        writeln!(writer, ".ob {}", OUTPUT_LABEL)?;

        let cover = self.cover();
        writeln!(writer, ".p {}", cover.len())?;
        for implicant in cover.implicants() {
            writeln!(writer, "{} 1", implicant.pattern())?;
        }

        writeln!(writer, ".e")
    }
}
