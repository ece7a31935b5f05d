//! Text table of every destination, for the "show all solutions" view.

use crate::engine::UNREACHABLE;
use crate::store::PathStore;

/// Render one row per vertex: id, distance (or `unreachable`) and path
/// (or `none`).
pub fn dump_all_destinations(distances: &[i32], paths: &PathStore) -> String {
    let mut out = String::from("Destination\tDistance\tPath\n");
    for (v, &d) in distances.iter().enumerate() {
        let path = if d == UNREACHABLE { None } else { paths.get(v) };
        match path {
            Some(seq) => {
                let joined = seq
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" - ");
                out.push_str(&format!("{v}\t\t{d}\t\t{joined}\n"));
            }
            None => {
                out.push_str(&format!("{v}\t\tunreachable\tnone\n"));
            }
        }
    }
    out
}
