//! Plain-text rendering of user summaries.

use std::fmt::Write;

use super::rollup::UserSummary;

const HEADER: [&str; 12] = [
    "user", "name", "energy", "fhc", "edvd", "xanax", "lsd", "drinks", "attacks", "refills",
    "dumps", "jp_e",
];

/// Render one line per summary, in the given order, under a header line.
pub fn render_report(summaries: &[UserSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADER.join("\t"));
    for s in summaries {
        let name = if s.name.is_empty() { "-" } else { s.name.as_str() };
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.user_id,
            name,
            s.energy,
            s.flat_boosters,
            s.proportional_boosters,
            s.xanax,
            s.lsd,
            s.energy_drinks,
            s.attacks,
            s.energy_refills,
            s.dumps,
            s.jp_energy,
        );
    }
    out
}
