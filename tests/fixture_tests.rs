//! Integration tests using rendered-text fixtures
//!
//! Each test builds one diagram through the public builders and compares its
//! rendering with testdata/<name>.puml.
//! Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use umlscribe::primitives::activity::{Action, Swimlane, WhileLoop};
use umlscribe::primitives::class::{Class, ClassPackage, Member, RelationKind, SeparatorStyle};
use umlscribe::primitives::component::{
    Component, ComponentContainer, ComponentLinkKind, ContainerKind, Interface,
};
use umlscribe::primitives::deployment::{DeploymentKind, DeploymentLinkKind, DeploymentNode};
use umlscribe::primitives::gantt::{Anchor, Milestone, PrintScale, Task, Weekday};
use umlscribe::primitives::mindmap::MindmapNode;
use umlscribe::primitives::network::{Network, NetworkNode, NodeGroup};
use umlscribe::primitives::sequence::{
    Activation, FragmentKind, Message, Participant, SequenceNote,
};
use umlscribe::primitives::state::State;
use umlscribe::primitives::usecase::{Actor, Boundary, Usecase, UsecaseLinkKind};
use umlscribe::primitives::wbs::WbsNode;
use umlscribe::primitives::{
    ActivityDiagram, ClassDiagram, ComponentDiagram, DataDiagram, DeploymentDiagram, GanttDiagram,
    MindmapDiagram, NetworkDiagram, ObjectDiagram, SequenceDiagram, StateDiagram, UsecaseDiagram,
    WbsDiagram,
};
use umlscribe::{
    Diagram, Document, EmbedOptions, HorizontalAlign, Legend, Link, Note, Style,
};

/// Get the path to the fixture directory
fn get_testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Normalize output for comparison (trim trailing whitespace from each line)
fn normalize_output(s: &str) -> String {
    s.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Render `diagram` and compare with the named fixture
fn run_fixture(test_name: &str, diagram: Diagram) {
    let fixture = get_testdata_dir().join(format!("{}.puml", test_name));
    let expected = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", fixture, e));

    let actual = umlscribe::render(&diagram);

    let expected_normalized = normalize_output(&expected);
    let actual_normalized = normalize_output(&actual);

    if expected_normalized != actual_normalized {
        eprintln!("=== Test: {} ===", test_name);
        eprintln!("\n--- Expected ---");
        eprintln!("{}", expected_normalized);
        eprintln!("\n--- Actual ---");
        eprintln!("{}", actual_normalized);
        eprintln!("\n--- Diff ---");

        let expected_lines: Vec<_> = expected_normalized.lines().collect();
        let actual_lines: Vec<_> = actual_normalized.lines().collect();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).unwrap_or(&"<missing>");
            let act = actual_lines.get(i).unwrap_or(&"<missing>");
            if exp != act {
                eprintln!("Line {}: expected {:?}", i + 1, exp);
                eprintln!("Line {}: actual   {:?}", i + 1, act);
            }
        }

        panic!("Output mismatch for test: {}", test_name);
    }
}

/// Macro to generate one test per fixture; `$name` is also the function that
/// builds the diagram
macro_rules! fixture_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<fixture_ $name>]() {
                run_fixture(stringify!($name), $name());
            }
        }
    };
}

// =============================================================================
// Diagram builders
// =============================================================================

fn state_order_lifecycle() -> Diagram {
    let mut b = StateDiagram::builder();
    b.title("Order lifecycle").unwrap();
    b.hide_empty_description();
    b.initial("Pending").unwrap();
    b.state(State::new("Pending").description("awaiting payment")).unwrap();
    b.composite("Fulfilment", |s| {
        s.initial("Packing")?;
        s.state("Packing")?;
        s.transition(("Packing", "Shipped", "handover"))?;
        s.state("Shipped")?;
        Ok(())
    })
    .unwrap();
    b.transition(("Pending", "Fulfilment", "paid")).unwrap();
    b.terminal("Fulfilment").unwrap();
    b.build().into()
}

fn activity_checkout() -> Diagram {
    let mut b = ActivityDiagram::builder();
    b.swimlane("Customer").unwrap();
    b.start().unwrap();
    b.action("Add items").unwrap();
    b.conditional("in stock?", |c| {
        c.then(Some("yes"), |s| {
            s.action("Reserve items")?;
            Ok(())
        })?;
        c.otherwise(Some("no"), |s| {
            s.action(Action::new("Notify").style(Style::fill("pink")))?;
            s.stop()?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();
    b.swimlane(Swimlane::new("Warehouse").style(Style::fill("AntiqueWhite")))
        .unwrap();
    b.fork(|f| {
        f.branch(|s| {
            s.action("Pick")?;
            Ok(())
        })?;
        f.branch(|s| {
            s.action("Print label")?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();
    b.while_loop(WhileLoop::new("more parcels?").is("yes").exit("no"), |s| {
        s.action("Ship parcel")?;
        Ok(())
    })
    .unwrap();
    b.arrow("done").unwrap();
    b.stop().unwrap();
    b.build().into()
}

fn class_repository() -> Diagram {
    let mut b = ClassDiagram::builder();
    b.hide_empty_members();
    b.package(ClassPackage::new("domain"), |s| {
        s.class(
            Class::interface("Repository")
                .generics("T")
                .member(Member::new("find(id) : T").public())
                .member(Member::new("save(item : T)").public()),
        )?;
        s.class(
            Class::new("SqlRepository")
                .member(Member::new("pool : Pool").private())
                .separator(SeparatorStyle::Dotted)
                .member(Member::new("connect() : Pool").is_static()),
        )?;
        Ok(())
    })
    .unwrap();
    b.relate("Repository", RelationKind::Implementation, "SqlRepository")
        .unwrap();
    b.relation(
        Link::new("SqlRepository", RelationKind::Composition, "Pool")
            .cardinality("1", "many")
            .label("owns"),
    )
    .unwrap();
    b.note(Note::new("generic over entities").left().of("Repository"))
        .unwrap();
    b.build().into()
}

fn sequence_login() -> Diagram {
    let mut b = SequenceDiagram::builder();
    b.autonumber(None, None, None);
    b.participant(Participant::actor("User")).unwrap();
    b.participant(Participant::new("Auth Service").alias("Auth"))
        .unwrap();
    b.participant(Participant::database("Users")).unwrap();
    b.message(
        Message::new("User", "Auth")
            .label("login(credentials)")
            .activation(Activation::Activate),
    )
    .unwrap();
    b.message(("Auth", "Users", "lookup")).unwrap();
    b.message(Message::new("Users", "Auth").reply().label("record"))
        .unwrap();
    b.fragment(FragmentKind::Alt, |f| {
        f.section(Some("valid"), |s| {
            s.message(Message::new("Auth", "User").reply().label("token"))?;
            Ok(())
        })?;
        f.section(Some("invalid"), |s| {
            s.message(Message::new("Auth", "User").reply().label("401"))?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();
    b.deactivate("Auth").unwrap();
    b.note(SequenceNote::right_of("User", "session stored"))
        .unwrap();
    b.build().into()
}

fn usecase_shop() -> Diagram {
    let mut b = UsecaseDiagram::builder();
    b.left_to_right();
    b.actor("Customer").unwrap();
    b.actor(Actor::new("Payment Provider").alias("PP")).unwrap();
    b.boundary(Boundary::new("Web Shop"), |s| {
        s.usecase(Usecase::new("Checkout").alias("UC1"))?;
        s.usecase(Usecase::new("Pay by card").alias("UC2"))?;
        Ok(())
    })
    .unwrap();
    b.link(Link::new("Customer", UsecaseLinkKind::Association, "UC1"))
        .unwrap();
    b.link(Link::new("UC1", UsecaseLinkKind::Include, "UC2"))
        .unwrap();
    b.link(Link::new("UC2", UsecaseLinkKind::Association, "PP"))
        .unwrap();
    b.note(Note::new("card data never\nstored locally").right().of("UC2"))
        .unwrap();
    b.build().into()
}

fn component_platform() -> Diagram {
    let mut b = ComponentDiagram::builder();
    b.title("Platform").unwrap();
    b.caption("Figure 1").unwrap();
    b.legend(Legend::new("internal only").align(HorizontalAlign::Right))
        .unwrap();
    b.container(ComponentContainer::new(ContainerKind::Package, "Frontend"), |s| {
        s.component(Component::new("Web App").alias("web"))?;
        Ok(())
    })
    .unwrap();
    b.container(ComponentContainer::new(ContainerKind::Node, "Backend"), |s| {
        s.component(Component::new("API").alias("api"))?;
        s.interface(Interface::new("REST").alias("rest"))?;
        Ok(())
    })
    .unwrap();
    b.link(Link::new("web", ComponentLinkKind::Dependency, "rest").label("HTTPS"))
        .unwrap();
    b.link(
        Link::new("rest", ComponentLinkKind::Association, "api")
            .style(Style::new().line_color("blue").dashed()),
    )
    .unwrap();
    b.build().into()
}

fn deployment_cluster() -> Diagram {
    let mut b = DeploymentDiagram::builder();
    b.element(DeploymentNode::new(DeploymentKind::Actor, "Operator"))
        .unwrap();
    b.container(DeploymentNode::new(DeploymentKind::Cloud, "Cluster"), |s| {
        s.container(
            DeploymentNode::new(DeploymentKind::Node, "worker-1").alias("w1"),
            |s| {
                s.element(DeploymentNode::new(DeploymentKind::Queue, "jobs"))?;
                Ok(())
            },
        )?;
        s.element(
            DeploymentNode::new(DeploymentKind::Storage, "Volumes")
                .style(Style::fill("#DDDDDD")),
        )?;
        Ok(())
    })
    .unwrap();
    b.link(Link::new("Operator", DeploymentLinkKind::Wavy, "w1"))
        .unwrap();
    b.link(Link::new("w1", DeploymentLinkKind::Composition, "Volumes"))
        .unwrap();
    b.build().into()
}

fn object_capitals() -> Diagram {
    use umlscribe::primitives::object::{MapNode, ObjectNode};

    let mut b = ObjectDiagram::builder();
    b.object(
        ObjectNode::new("London")
            .field("population", "8.9M")
            .field("country", "UK"),
    )
    .unwrap();
    b.object("Paris").unwrap();
    b.map(
        MapNode::new("Capitals")
            .alias("C")
            .entry("UK", "London")
            .link("France", "Paris"),
    )
    .unwrap();
    b.relation(Link::new("C", RelationKind::Association, "London"))
        .unwrap();
    b.build().into()
}

fn network_office() -> Diagram {
    let mut b = NetworkDiagram::builder();
    b.network(
        Network::new("office")
            .address("192.168.1.0/24")
            .description("Office LAN"),
        |n| {
            n.member(NetworkNode::new("printer").address("192.168.1.20"))?;
            n.member(
                NetworkNode::new("nas")
                    .address("192.168.1.30")
                    .shape(DeploymentKind::Database),
            )?;
            Ok(())
        },
    )
    .unwrap();
    b.group(NodeGroup::new().description("Shared"), |g| {
        g.member("printer")?.member("nas")?;
        Ok(())
    })
    .unwrap();
    b.build().into()
}

fn mindmap_release() -> Diagram {
    let mut b = MindmapDiagram::builder();
    b.root(MindmapNode::new("Release").style(Style::fill("Gold")), |r| {
        r.node("Features", |f| {
            f.leaf("Search")?;
            f.leaf(MindmapNode::new("Export").boxless())?;
            Ok(())
        })?;
        r.node(MindmapNode::new("Risks").left(), |f| {
            f.leaf("Schedule\nslip")?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();
    b.build().into()
}

fn wbs_website() -> Diagram {
    let mut b = WbsDiagram::builder();
    b.root("Website", |r| {
        r.node(WbsNode::new("Design").alias("d"), |d| {
            d.leaf("Wireframes")?;
            Ok(())
        })?;
        r.leaf(WbsNode::new("Launch").alias("l").right())?;
        Ok(())
    })
    .unwrap();
    b.link("d", "l").unwrap();
    b.build().into()
}

fn json_person() -> Diagram {
    let value = serde_json::json!({
        "name": "John",
        "age": 42,
        "tags": ["admin", "ops"]
    });
    let mut b = DataDiagram::json(&value).unwrap();
    b.highlight(&["tags"]).unwrap();
    b.build().into()
}

fn gantt_migration() -> Diagram {
    let mut b = GanttDiagram::builder();
    b.project_start("2024-03-04").unwrap();
    b.print_scale(PrintScale::Daily);
    b.closed_weekday(Weekday::Sunday).unwrap();
    b.task(Task::new("Export data").alias("E").days(3)).unwrap();
    b.task(
        Task::new("Import data")
            .alias("I")
            .days(2)
            .starts(Anchor::end_of("E"))
            .completed(0),
    )
    .unwrap();
    b.milestone(Milestone::new("Cutover", Anchor::end_of("I")))
        .unwrap();
    b.build().into()
}

/// A class note carrying an inline JSON view
fn embedded_json_note() -> Diagram {
    let data = DataDiagram::json(&serde_json::json!({"port": 8080}))
        .unwrap()
        .build();
    let mut b = ClassDiagram::builder();
    b.class("Server").unwrap();
    b.note(Note::new(data.embed(&EmbedOptions::inline())).right().of("Server"))
        .unwrap();
    b.build().into()
}

// =============================================================================
// Fixture tests
// =============================================================================

fixture_test!(state_order_lifecycle);
fixture_test!(activity_checkout);
fixture_test!(class_repository);
fixture_test!(sequence_login);
fixture_test!(usecase_shop);
fixture_test!(component_platform);
fixture_test!(deployment_cluster);
fixture_test!(object_capitals);
fixture_test!(network_office);
fixture_test!(mindmap_release);
fixture_test!(wbs_website);
fixture_test!(json_person);
fixture_test!(gantt_migration);
fixture_test!(embedded_json_note);

#[test]
fn test_diagram_ir_survives_serde() {
    let diagram = sequence_login();
    let json = serde_json::to_string(&diagram).unwrap();
    assert!(json.starts_with("{\"kind\":\"sequence\""));
    let back: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diagram);
    assert_eq!(back.render(), diagram.render());
}
