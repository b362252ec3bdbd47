//! Performance benchmarks for publish-gate
//!
//! These benchmarks measure the cost of one evaluation call — the engine is
//! consulted synchronously inside the host's publish pipeline, so the
//! per-node latency is what matters:
//! - Static rule scan with registries of increasing size
//! - The override-attribute fast path
//! - Message rendering
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! - The static scan is linear in the number of registered rules until the
//!   first match; a worst-case miss touches every rule.
//! - The override path is constant: one attribute read plus one count.
//! - Counting cost is entirely the host's; the in-memory tree here keeps it
//!   negligible so the rule-matching overhead dominates.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use publish_gate::{ContentQuery, DocTypeMatch, PublishGate, Rule};
use std::collections::HashMap;

struct FlatNode {
    parent: Option<u32>,
    alias: String,
    published: bool,
    attribute: Option<i64>,
}

/// One parent with published children, flat, keyed by id
struct FlatTree {
    nodes: HashMap<u32, FlatNode>,
}

impl FlatTree {
    fn page_with_articles(published: u32) -> (Self, u32) {
        let mut nodes = HashMap::new();
        nodes.insert(
            0,
            FlatNode {
                parent: None,
                alias: "page".to_string(),
                published: true,
                attribute: None,
            },
        );
        for id in 1..=published {
            nodes.insert(
                id,
                FlatNode {
                    parent: Some(0),
                    alias: "article".to_string(),
                    published: true,
                    attribute: None,
                },
            );
        }
        let draft = published + 1;
        nodes.insert(
            draft,
            FlatNode {
                parent: Some(0),
                alias: "article".to_string(),
                published: false,
                attribute: None,
            },
        );
        (FlatTree { nodes }, draft)
    }
}

impl ContentQuery for FlatTree {
    type Node = u32;

    fn parent(&self, node: &u32) -> Option<u32> {
        self.nodes[node].parent
    }

    fn is_published(&self, node: &u32) -> bool {
        self.nodes[node].published
    }

    fn type_alias(&self, node: &u32) -> String {
        self.nodes[node].alias.clone()
    }

    fn count_published_children(&self, parent: &u32, filter: &DocTypeMatch) -> usize {
        self.nodes
            .values()
            .filter(|n| n.parent == Some(*parent) && n.published && filter.matches(&n.alias))
            .count()
    }

    fn count_published_descendants(&self, parent: &u32, filter: &DocTypeMatch) -> usize {
        // Flat tree: direct children are the only descendants.
        self.count_published_children(parent, filter)
    }

    fn numeric_attribute(&self, node: &u32, _attribute: &str) -> Option<i64> {
        self.nodes[node].attribute
    }
}

fn decoy_rule(index: usize) -> Rule {
    Rule::new(
        DocTypeMatch::Alias(format!("folder-{index}")),
        DocTypeMatch::Alias(format!("item-{index}")),
        5,
    )
}

fn bench_static_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_scan");

    for rule_count in [10, 100, 1000] {
        // Worst case: the matching rule is registered last.
        let mut gate = PublishGate::new();
        for i in 0..rule_count {
            gate.register_rule(decoy_rule(i));
        }
        gate.register_rule(Rule::new(
            DocTypeMatch::Alias("page".to_string()),
            DocTypeMatch::Alias("article".to_string()),
            100,
        ));

        let (tree, draft) = FlatTree::page_with_articles(20);

        group.bench_with_input(
            BenchmarkId::new("last_rule_matches", rule_count),
            &rule_count,
            |b, _| {
                b.iter(|| {
                    let decision = gate.evaluate(black_box(&tree), black_box(&draft));
                    black_box(decision)
                });
            },
        );
    }

    group.finish();
}

fn bench_override_path(c: &mut Criterion) {
    let mut gate = PublishGate::from_config(publish_gate::Config {
        property_alias: Some("maxPublishedNodes".to_string()),
        warn_on_property_limit: false,
        rules: Vec::new(),
    });
    for i in 0..1000 {
        gate.register_rule(decoy_rule(i));
    }

    let (mut tree, draft) = FlatTree::page_with_articles(20);
    tree.nodes.get_mut(&0).unwrap().attribute = Some(50);

    c.bench_function("override_path_skips_static_scan", |b| {
        b.iter(|| {
            let decision = gate.evaluate(black_box(&tree), black_box(&draft));
            black_box(decision)
        });
    });
}

fn bench_message_rendering(c: &mut Criterion) {
    let rule = Rule::new(
        DocTypeMatch::Alias("page".to_string()),
        DocTypeMatch::Alias("article".to_string()),
        3,
    );

    c.bench_function("blocked_message", |b| {
        b.iter(|| black_box(rule.blocked_message()));
    });

    c.bench_function("warning_message", |b| {
        b.iter(|| black_box(rule.warning_message(black_box(2))));
    });
}

criterion_group!(
    benches,
    bench_static_scan,
    bench_override_path,
    bench_message_rendering
);
criterion_main!(benches);
