//! JSON rendering of query results

use std::io::Write;
use serde::Serialize;
use rayon::prelude::*;
use serde_json::{json, Value};
use crate::cluster::Clique;
use crate::cluster::metrics::clique_stats;
use crate::graph::FriendGraph;
use crate::error::Result;

/// Write any serializable value as JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(std::io::Error::from)?;

    writer.write_all(rendered.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Shortest-chain result; `chain` is null when the two people are not connected
pub fn chain_report(from: &str, to: &str, chain: Option<&[String]>) -> Value {
    json!({
        "from": from,
        "to": to,
        "length": chain.map(|c| c.len().saturating_sub(1)),
        "chain": chain,
    })
}

/// Clique result for one school; `cliques` is null when the school has no students
pub fn clique_report(school: &str, cliques: &[Clique]) -> Value {
    let groups = if cliques.is_empty() { None } else { Some(cliques) };

    json!({
        "school": school,
        "clique_count": cliques.len(),
        "cliques": groups,
    })
}

/// Clique reports for every school, sorted by school; null when the graph
/// has no students
pub fn school_clique_report(graph: &FriendGraph) -> Value {
    let schools = graph.schools();
    log::info!("Finding cliques for {} schools", schools.len());

    if schools.is_empty() {
        return Value::Null;
    }

    let reports: Vec<Value> = schools
        .into_par_iter()
        .map(|school| clique_report(school, &clique_stats(graph, school)))
        .collect();

    Value::Array(reports)
}

/// Connector result; `connectors` is null when there are none
pub fn connector_report(connectors: Option<&[String]>) -> Value {
    json!({
        "connector_count": connectors.map_or(0, |c| c.len()),
        "connectors": connectors,
    })
}

/// Summary statistics of a friendship graph
pub fn graph_summary(graph: &FriendGraph) -> Value {
    let people = graph.len();
    let friendships = graph.friendship_count();
    let avg_friends = if people == 0 {
        0.0
    } else {
        2.0 * friendships as f64 / people as f64
    };

    json!({
        "person_count": people,
        "friendship_count": friendships,
        "student_count": graph.student_count(),
        "schools": graph.schools(),
        "avg_friends": avg_friends,
        "isolated_count": graph.members().iter().filter(|p| p.friends.is_empty()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_school_graph;

    #[test]
    fn test_chain_report() {
        let chain = vec!["a".to_string(), "b".to_string()];
        let report = chain_report("a", "b", Some(chain.as_slice()));
        assert_eq!(report["length"], 1);
        assert_eq!(report["chain"], json!(["a", "b"]));

        let missing = chain_report("a", "z", None);
        assert!(missing["chain"].is_null());
        assert!(missing["length"].is_null());
    }

    #[test]
    fn test_clique_report_empty_is_null() {
        let report = clique_report("mit", &[]);
        assert_eq!(report["clique_count"], 0);
        assert!(report["cliques"].is_null());
    }

    #[test]
    fn test_school_clique_report_matches_single_school() {
        let graph = test_school_graph(
            &[("a", Some("nyu")), ("b", Some("cornell")), ("c", Some("nyu")), ("d", None)],
            &[("a", "c"), ("c", "d")],
        );
        let report = school_clique_report(&graph);

        let schools: Vec<&str> = report
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["school"].as_str().unwrap())
            .collect();
        assert_eq!(schools, vec!["cornell", "nyu"]);
        assert_eq!(report[1], clique_report("nyu", &clique_stats(&graph, "nyu")));
        assert_eq!(report[1]["cliques"][0]["members"], json!(["a", "c"]));
    }

    #[test]
    fn test_school_clique_report_without_students_is_null() {
        let graph = test_school_graph(&[("a", None), ("b", None)], &[("a", "b")]);
        assert!(school_clique_report(&graph).is_null());
    }

    #[test]
    fn test_connector_report() {
        let names = vec!["b".to_string()];
        assert_eq!(connector_report(Some(names.as_slice()))["connector_count"], 1);
        assert!(connector_report(None)["connectors"].is_null());
    }

    #[test]
    fn test_graph_summary() {
        let graph = test_school_graph(
            &[("a", Some("nyu")), ("b", None), ("c", None)],
            &[("a", "b")],
        );
        let summary = graph_summary(&graph);
        assert_eq!(summary["person_count"], 3);
        assert_eq!(summary["friendship_count"], 1);
        assert_eq!(summary["student_count"], 1);
        assert_eq!(summary["schools"], json!(["nyu"]));
        assert_eq!(summary["isolated_count"], 1);
    }

    #[test]
    fn test_write_json_compact() {
        let mut out = Vec::new();
        write_json(&mut out, &json!({"k": 1}), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"k\":1}\n");
    }
}
