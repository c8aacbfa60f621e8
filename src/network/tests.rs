//! Network construction tests: additivity, thresholding, and node consistency

use super::*;
use crate::person::{Award, Editorship, Membership, Person};
use std::collections::HashSet;

fn person(id: &str) -> Person {
    Person {
        id: id.to_string(),
        name: id.to_uppercase(),
        wikidata_id: None,
        description: Some(format!("about {}", id)),
        viaf_id: None,
        isiscb_id: None,
        awards: Vec::new(),
        editorships: Vec::new(),
        memberships: Vec::new(),
        role_count: 0,
        earliest_year: None,
        latest_year: None,
    }
}

fn with_org(mut p: Person, org: &str) -> Person {
    p.memberships.push(Membership {
        org: org.to_string(),
        role: "member".to_string(),
        start: None,
        end: None,
    });
    p.role_count += 1;
    p
}

fn with_journal(mut p: Person, journal: &str) -> Person {
    p.editorships.push(Editorship {
        journal: journal.to_string(),
        role: "editor".to_string(),
        start: String::new(),
        end: String::new(),
    });
    p.role_count += 1;
    p
}

fn with_award(mut p: Person, award: &str) -> Person {
    p.awards.push(Award {
        name: award.to_string(),
        year: None,
    });
    p.role_count += 1;
    p
}

fn build_default(people: &[Person]) -> Graph {
    build(people, &NetworkConfig::default())
}

// === Scenario: shared organization and journal add up to one edge ===

#[test]
fn org_and_journal_accumulate_into_one_edge() {
    let a = with_journal(with_org(person("a"), "Society"), "Isis");
    let b = with_journal(with_org(person("b"), "Society"), "Isis");
    let graph = build_default(&[a, b]);

    assert_eq!(graph.links.len(), 1);
    let e = graph.edge("a", "b").expect("edge a-b");
    assert_eq!(e.weight, 3);
    assert_eq!((e.source.as_str(), e.target.as_str()), ("a", "b"));
}

#[test]
fn weight_is_independent_of_input_order() {
    let a = with_journal(with_org(person("a"), "Society"), "Isis");
    let b = with_org(with_journal(person("b"), "Isis"), "Society");
    let forward = build_default(&[a.clone(), b.clone()]);
    let backward = build_default(&[b, a]);

    assert_eq!(forward, backward);
}

#[test]
fn endpoints_are_ordered_by_id() {
    let z = with_journal(person("z"), "Isis");
    let m = with_journal(person("m"), "Isis");
    let graph = build_default(&[z, m]);

    assert_eq!(graph.links[0].source, "m");
    assert_eq!(graph.links[0].target, "z");
    assert!(graph.edge("z", "m").is_some());
}

// === Scenario: materiality threshold ===

#[test]
fn single_shared_org_is_below_threshold() {
    let a = with_org(person("a"), "Society");
    let b = with_org(person("b"), "Society");
    let graph = build_default(&[a, b]);

    assert!(graph.links.is_empty());
    assert!(graph.nodes.is_empty(), "no surviving edge, no node");
}

#[test]
fn single_shared_journal_is_enough() {
    let a = with_journal(person("a"), "Isis");
    let b = with_journal(person("b"), "Isis");
    let graph = build_default(&[a, b]);

    assert_eq!(graph.edge("a", "b").map(|e| e.weight), Some(2));
}

#[test]
fn two_shared_orgs_are_enough() {
    let a = with_org(with_org(person("a"), "Society"), "Academy");
    let b = with_org(with_org(person("b"), "Society"), "Academy");
    let graph = build_default(&[a, b]);

    assert_eq!(graph.edge("a", "b").map(|e| e.weight), Some(2));
}

#[test]
fn org_plus_award_is_enough() {
    let a = with_award(with_org(person("a"), "Society"), "Medal");
    let b = with_award(with_org(person("b"), "Society"), "Medal");
    let graph = build_default(&[a, b]);

    assert_eq!(graph.edge("a", "b").map(|e| e.weight), Some(2));
}

#[test]
fn repeated_role_in_one_group_counts_once() {
    let a = with_org(with_org(person("a"), "Society"), "Society");
    let b = with_org(person("b"), "Society");
    let graph = build_default(&[a, b]);

    assert!(graph.links.is_empty());
}

#[test]
fn edge_present_iff_weight_reaches_threshold() {
    let people = vec![
        with_journal(with_org(person("a"), "Society"), "Isis"),
        with_journal(person("b"), "Isis"),
        with_org(person("c"), "Society"),
        with_award(with_org(person("d"), "Society"), "Medal"),
        with_award(person("e"), "Medal"),
    ];
    let config = NetworkConfig::default();
    let graph = build(&people, &config);

    // Recompute raw weights independently and compare.
    let mut expected = Vec::new();
    for i in 0..people.len() {
        for j in (i + 1)..people.len() {
            let (p, q) = (&people[i], &people[j]);
            let shared = |a: Vec<&str>, b: Vec<&str>| -> u32 {
                let a: HashSet<&str> = a.into_iter().collect();
                let b: HashSet<&str> = b.into_iter().collect();
                a.intersection(&b).count() as u32
            };
            let w = shared(
                p.memberships.iter().map(|m| m.org.as_str()).collect(),
                q.memberships.iter().map(|m| m.org.as_str()).collect(),
            ) * config.weights.organization
                + shared(
                    p.editorships.iter().map(|e| e.journal.as_str()).collect(),
                    q.editorships.iter().map(|e| e.journal.as_str()).collect(),
                ) * config.weights.journal
                + shared(
                    p.awards.iter().map(|a| a.name.as_str()).collect(),
                    q.awards.iter().map(|a| a.name.as_str()).collect(),
                ) * config.weights.award;
            if w >= config.min_weight {
                expected.push((p.id.clone(), q.id.clone(), w));
            }
        }
    }
    expected.sort();

    let actual: Vec<(String, String, u32)> = graph
        .links
        .iter()
        .map(|e| (e.source.clone(), e.target.clone(), e.weight))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn raising_threshold_only_removes_edges() {
    let people = vec![
        with_journal(with_org(person("a"), "Society"), "Isis"),
        with_journal(person("b"), "Isis"),
        with_award(with_org(person("c"), "Society"), "Medal"),
        with_award(with_org(person("d"), "Society"), "Medal"),
    ];
    let low = build(&people, &NetworkConfig::default().with_min_weight(1));
    let mid = build(&people, &NetworkConfig::default());
    let high = build(&people, &NetworkConfig::default().with_min_weight(3));

    assert!(low.links.len() >= mid.links.len());
    assert!(mid.links.len() >= high.links.len());
    for e in &high.links {
        assert!(mid.links.contains(e));
    }
    for e in &mid.links {
        assert!(low.links.contains(e));
    }
}

// === Scenario: two-pass node consistency ===

#[test]
fn nodes_match_surviving_edge_endpoints() {
    let people = vec![
        with_journal(person("a"), "Isis"),
        with_journal(person("b"), "Isis"),
        with_org(person("c"), "Society"),
        with_org(person("d"), "Society"),
        person("loner"),
    ];
    let graph = build_default(&people);

    let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids, vec!["a", "b"]);

    let endpoints: HashSet<&str> = graph
        .links
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();
    let unique_nodes: HashSet<&str> = node_ids.iter().copied().collect();
    assert_eq!(unique_nodes.len(), node_ids.len(), "no duplicate nodes");
    assert_eq!(endpoints, unique_nodes);
}

#[test]
fn node_carries_person_summary() {
    let a = with_award(with_journal(person("a"), "Isis"), "Medal");
    let b = with_journal(person("b"), "Isis");
    let graph = build_default(&[a, b]);

    let node = graph.node("a").expect("node a");
    assert_eq!(node.name, "A");
    assert_eq!(node.description.as_deref(), Some("about a"));
    assert_eq!(node.role_count, 2);
}

#[test]
fn links_sorted_by_source_then_target() {
    let people: Vec<Person> = ["d", "a", "c", "b"]
        .iter()
        .map(|id| with_journal(person(id), "Isis"))
        .collect();
    let graph = build_default(&people);

    assert_eq!(graph.links.len(), 6);
    let pairs: Vec<(&str, &str)> = graph
        .links
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    let mut sorted = pairs.clone();
    sorted.sort();
    assert_eq!(pairs, sorted);
    assert!(pairs.iter().all(|(s, t)| s < t));
}

#[test]
fn custom_weights_apply_per_kind() {
    let weights = AffiliationWeights {
        organization: 2,
        journal: 0,
        award: 5,
    };
    let a = with_award(with_journal(with_org(person("a"), "Society"), "Isis"), "Medal");
    let b = with_award(with_journal(with_org(person("b"), "Society"), "Isis"), "Medal");
    let graph = build(&[a, b], &NetworkConfig::default().with_weights(weights));

    assert_eq!(graph.edge("a", "b").map(|e| e.weight), Some(7));
}

#[test]
fn affiliation_index_groups_by_name() {
    let people = vec![
        with_org(person("a"), "Society"),
        with_org(with_org(person("b"), "Society"), "Academy"),
    ];
    let index = affiliation_index(&people, AffiliationKind::Organization);

    assert_eq!(index.len(), 2);
    assert_eq!(index["Society"].len(), 2);
    assert_eq!(index["Academy"].iter().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn neighbors_follow_links() {
    let people = vec![
        with_journal(person("a"), "Isis"),
        with_journal(person("b"), "Isis"),
        with_journal(person("c"), "Isis"),
    ];
    let graph = build_default(&people);

    let mut n: Vec<&str> = graph.neighbors("b").collect();
    n.sort();
    assert_eq!(n, vec!["a", "c"]);
}

#[test]
fn empty_people_yield_empty_graph() {
    let graph = build_default(&[]);
    assert!(graph.is_empty());
    assert!(graph.nodes.is_empty());
}
