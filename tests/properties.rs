//! Property tests for color normalization, name quoting, block nesting,
//! embedding and builder atomicity.

use proptest::prelude::*;

use umlscribe::builder::{
    ActivityScope, ClassScope, ComponentScope, DeploymentScope, SequenceScope, StateScope,
};
use umlscribe::primitives::sequence::ParticipantBox;
use umlscribe::primitives::{
    ActivityDiagram, ClassDiagram, ComponentDiagram, DataDiagram, DeploymentDiagram,
    SequenceDiagram, StateDiagram,
};
use umlscribe::render::{quote_name, render_color_bare, render_color_hash};
use umlscribe::{Color, Document, EmbedOptions};

fn nest_packages(scope: &mut ClassScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.class("Leaf")?;
        return Ok(());
    }
    scope.package(format!("p{}", depth).as_str(), |inner| nest_packages(inner, depth - 1))?;
    Ok(())
}

fn nest_partitions(scope: &mut ActivityScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.action("work")?;
        return Ok(());
    }
    scope.partition(format!("Stage {}", depth).as_str(), |inner| {
        nest_partitions(inner, depth - 1)
    })?;
    Ok(())
}

fn nest_composites(scope: &mut StateScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.state("Leaf")?;
        return Ok(());
    }
    scope.composite(format!("S{}", depth).as_str(), |inner| nest_composites(inner, depth - 1))?;
    Ok(())
}

fn nest_component_containers(scope: &mut ComponentScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.component("Leaf")?;
        return Ok(());
    }
    scope.container(format!("Layer{}", depth).as_str(), |inner| {
        nest_component_containers(inner, depth - 1)
    })?;
    Ok(())
}

fn nest_nodes(scope: &mut DeploymentScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.element("Leaf")?;
        return Ok(());
    }
    scope.container(format!("Host{}", depth).as_str(), |inner| nest_nodes(inner, depth - 1))?;
    Ok(())
}

fn nest_boxes(scope: &mut SequenceScope, depth: usize) -> umlscribe::Result<()> {
    if depth == 0 {
        scope.participant("Leaf")?;
        return Ok(());
    }
    scope.participant_box(ParticipantBox::titled(format!("Box{}", depth)), |inner| {
        nest_boxes(inner, depth - 1)
    })?;
    Ok(())
}

/// Checks that every `{` opener is closed at its own indentation.
fn assert_balanced(rendered: &str) {
    assert_balanced_by(rendered, |body| body.ends_with('{'), "}");
}

/// Checks that every line accepted by `opens` is matched by a `close` line
/// at the same indentation.
fn assert_balanced_by(rendered: &str, opens: fn(&str) -> bool, close: &str) {
    let mut open: Vec<usize> = Vec::new();
    for line in rendered.lines() {
        let indent = line.len() - line.trim_start().len();
        let body = line.trim();
        if opens(body) {
            open.push(indent);
        } else if body == close {
            assert_eq!(open.pop(), Some(indent), "unbalanced close in:\n{}", rendered);
        }
    }
    assert!(open.is_empty(), "unclosed block in:\n{}", rendered);
}

proptest! {
    #[test]
    fn prop_plain_names_are_not_quoted(name in "[A-Za-z0-9_.]{1,16}") {
        prop_assert_eq!(quote_name(&name), name.as_str());
    }

    #[test]
    fn prop_names_with_spaces_are_quoted(head in "[a-z]{1,8}", tail in "[a-z]{1,8}") {
        let name = format!("{} {}", head, tail);
        prop_assert_eq!(quote_name(&name).into_owned(), format!("\"{}\"", name));
    }

    #[test]
    fn prop_bare_of_hashed_is_bare(value in "#?[A-Za-z0-9]{1,12}") {
        let color = Color::parse(&value);
        let hashed = Color::parse(&render_color_hash(&color));
        prop_assert_eq!(render_color_bare(&hashed), render_color_bare(&color));
    }

    #[test]
    fn prop_hashing_is_idempotent(value in "#?[A-Za-z0-9]{1,12}") {
        let once = render_color_hash(&Color::named(value));
        let twice = render_color_hash(&Color::named(once.clone()));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_bare_strips_exactly_one_hash(body in "#{0,2}[A-Za-z0-9]{1,12}") {
        let color = Color::named(format!("#{}", body));
        prop_assert_eq!(render_color_bare(&color), body);
    }

    #[test]
    fn prop_nested_packages_stay_balanced(depth in 0usize..8) {
        let mut builder = ClassDiagram::builder();
        nest_packages(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced(&rendered);
        let leaf = format!("{}class Leaf", " ".repeat(depth * 2));
        prop_assert!(rendered.lines().any(|line| line == leaf));
    }

    #[test]
    fn prop_nested_partitions_stay_balanced(depth in 0usize..8) {
        let mut builder = ActivityDiagram::builder();
        nest_partitions(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced(&rendered);
        prop_assert_eq!(rendered.matches("partition ").count(), depth);
    }

    #[test]
    fn prop_nested_composites_stay_balanced(depth in 0usize..8) {
        let mut builder = StateDiagram::builder();
        nest_composites(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced(&rendered);
        prop_assert_eq!(rendered.lines().filter(|line| line.ends_with('{')).count(), depth);
    }

    #[test]
    fn prop_nested_component_containers_stay_balanced(depth in 0usize..8) {
        let mut builder = ComponentDiagram::builder();
        nest_component_containers(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced(&rendered);
        prop_assert_eq!(rendered.matches("package ").count(), depth);
    }

    #[test]
    fn prop_nested_nodes_stay_balanced(depth in 0usize..8) {
        let mut builder = DeploymentDiagram::builder();
        nest_nodes(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced(&rendered);
        prop_assert_eq!(rendered.lines().filter(|line| line.ends_with('{')).count(), depth);
    }

    #[test]
    fn prop_nested_boxes_stay_balanced(depth in 0usize..8) {
        let mut builder = SequenceDiagram::builder();
        nest_boxes(&mut builder, depth).unwrap();
        let rendered = builder.build().render();
        assert_balanced_by(&rendered, |body| body.starts_with("box"), "end box");
        prop_assert_eq!(rendered.matches("end box").count(), depth);
    }

    #[test]
    fn prop_generic_embed_drops_its_markers(states in prop::collection::vec("[A-Z][a-z]{0,6}", 0..6)) {
        let mut builder = StateDiagram::builder();
        for state in &states {
            builder.state(state.as_str()).unwrap();
        }
        let embedded = builder.build().embed(&EmbedOptions::default());
        prop_assert!(!embedded.contains("@startuml"));
        prop_assert!(!embedded.contains("@enduml"));
        prop_assert!(embedded.starts_with("{{\n"));
        prop_assert!(embedded.ends_with("\n}}"));
    }

    #[test]
    fn prop_specialized_embed_keeps_one_marker_pair(
        entries in prop::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..5),
        inline in any::<bool>(),
    ) {
        let diagram = DataDiagram::json(&entries).unwrap().build();
        let options = EmbedOptions { inline, transparent: true };
        let embedded = diagram.embed(&options);
        prop_assert_eq!(embedded.matches("@startjson").count(), 1);
        prop_assert_eq!(embedded.matches("@endjson").count(), 1);
        prop_assert_eq!(embedded.contains('\n'), !inline);
    }

    #[test]
    fn prop_failed_call_leaves_scope_unchanged(
        valid in prop::collection::vec("[A-Z][a-z]{0,6}", 0..6),
        blank in "[ \t]{0,4}",
    ) {
        let mut builder = StateDiagram::builder();
        for state in &valid {
            builder.state(state.as_str()).unwrap();
        }
        let before = builder.elements().to_vec();
        let rejected = builder.state(blank.as_str()).is_err();
        prop_assert!(rejected);
        let rejected = builder
            .composite("Outer", |s| {
                s.state("Inner")?;
                s.state(blank.as_str())?;
                Ok(())
            })
            .is_err();
        prop_assert!(rejected);
        prop_assert_eq!(builder.elements(), before.as_slice());
    }
}
