use std::io::{self, Write};

use genetics::{Cross, CrossStats, ordinal_suffix};

pub const INCOMPATIBLE_MESSAGE: &str = "These genotypes cannot be crossed with each other!";

const POSSIBILITIES_HEADER: &str = "!-----------------------= POSSIBILITIES =-----------------------!";
const OVERVIEW_HEADER     : &str = "!-----------------------= OVERVIEW =-----------------------!";
const IN_DEPTH_HEADER     : &str = "!-----------------------= IN-DEPTH OVERVIEW =-----------------------!";

/// Plain-text summary of a cross.
pub struct Report<'a> {
    cross: &'a Cross,
    stats: CrossStats,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(cross: &'a Cross) -> Self {
        Self { cross, stats: cross.stats() }
    }

    #[must_use]
    pub fn stats(&self) -> &CrossStats {
        &self.stats
    }

    pub fn write_incompatible<W: Write>(writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{INCOMPATIBLE_MESSAGE}")
    }

    /// Write every section of the report, in order.
    pub fn write_all<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.write_possibilities(writer)?;
        self.write_overview(writer)?;
        self.write_in_depth(writer)
    }

    pub fn write_possibilities<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{POSSIBILITIES_HEADER}")?;
        for (i, genotype) in self.cross.possibilities().iter().enumerate() {
            let n = i + 1;
            writeln!(writer, "{n}{} possibility is {genotype}", ordinal_suffix(n))?;
        }
        Ok(())
    }

    pub fn write_overview<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let CrossStats { pure, heterogeneous, dominant_character, .. } = self.stats;
        writeln!(writer, "{OVERVIEW_HEADER}")?;
        writeln!(writer, "There was/were {pure} pure genotypes from the possibilities.")?;
        writeln!(writer, "There was/were {heterogeneous} heterogeneous genotypes from the possibilities.")?;
        writeln!(writer, "There was/were {dominant_character} genotypes with dominant character from the possibilities.")
    }

    pub fn write_in_depth<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let stats = &self.stats;
        let lines = [
            (stats.pure,                   "pure"),
            (stats.heterogeneous,          "heterogeneous"),
            (stats.dominant_character,     "dominant characters"),
            (stats.pure_dominant,          "pure dominant characters"),
            (stats.heterogeneous_dominant, "heterogeneous dominant characters"),
        ];

        writeln!(writer, "{IN_DEPTH_HEADER}")?;
        for (count, label) in lines {
            writeln!(writer, "{} of the possibilities was/were {label}.", CrossStats::ratio(count))?;
        }
        Ok(())
    }
}
