//! Plain-text stock report.

use std::io::{self, Write};

use crate::stock::Inventory;

/// First line of every report.
pub const REPORT_HEADER: &str = "Items Report";

impl Inventory {
    /// Write the header followed by one `"<item> -> <quantity>"` line per item.
    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (name, qty) in self.iter() {
            writeln!(out, "{name} -> {qty}")?;
        }
        out.flush()
    }

    pub fn print_report(&self) -> io::Result<()> {
        self.write_report(io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_items_in_insertion_order() {
        let mut inv = Inventory::new();
        inv.add("apple", 7, None).unwrap();
        inv.add("banana", -2, None).unwrap();

        let mut buf = Vec::new();
        inv.write_report(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Items Report\napple -> 7\nbanana -> -2\n"
        );
    }

    #[test]
    fn empty_inventory_prints_only_header() {
        let mut buf = Vec::new();
        Inventory::new().write_report(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Items Report\n");
    }
}
