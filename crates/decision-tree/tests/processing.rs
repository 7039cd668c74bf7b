use decision_tree::{
    BehaviorRegistry, BuildOptions, DecisionTree, Element, NodeKind, Status, TreeBuilder,
    start_processing,
};

/// Agent state shared by the test behaviors.
#[derive(Default)]
struct Guard {
    walked: u32,
    log: Vec<&'static str>,
}

fn behaviors() -> BehaviorRegistry<Guard> {
    BehaviorRegistry::new()
        .with("look_around", |g: &mut Guard| {
            g.log.push("look_around");
            Status::Success
        })
        .with("walk_to_post", |g: &mut Guard| {
            g.log.push("walk_to_post");
            g.walked += 1;
            // Two ticks on the way, arrives on the third.
            if g.walked > 2 {
                Status::Success
            } else {
                Status::Running
            }
        })
        .with("salute", |g: &mut Guard| {
            g.log.push("salute");
            Status::Success
        })
        .with("give_up", |g: &mut Guard| {
            g.log.push("give_up");
            Status::Failure
        })
}

fn action(method: &str) -> Element {
    Element::new("Action").attr("method", method)
}

fn build(document: &Element) -> DecisionTree<Guard> {
    TreeBuilder::with_options(BuildOptions::new().with_seed(17))
        .build(document, &behaviors())
        .expect("valid document")
}

#[test]
fn sequence_runs_to_completion_then_resets() {
    let document = Element::new("Root").attr("name", "guard").child(
        Element::new("Sequence")
            .attr("name", "patrol")
            .child(action("look_around"))
            .child(action("walk_to_post"))
            .child(action("salute")),
    );
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    let cursor = |p: &decision_tree::Processor<Guard>| {
        p.tree().find("patrol").map(|n| n.cursor())
    };

    assert_eq!(processor.tick(&mut guard), Status::Running);
    assert_eq!(cursor(&processor), Some(1));

    assert_eq!(processor.tick(&mut guard), Status::Running);
    assert_eq!(cursor(&processor), Some(1));
    assert_eq!(processor.completed_runs(), 0);

    assert_eq!(processor.tick(&mut guard), Status::Success);
    assert_eq!(cursor(&processor), Some(0));
    assert_eq!(processor.completed_runs(), 1);

    assert_eq!(
        guard.log,
        vec![
            "look_around",
            "walk_to_post",
            "walk_to_post",
            "walk_to_post",
            "salute"
        ]
    );

    // A new run starts from the first child.
    guard.log.clear();
    processor.tick(&mut guard);
    assert_eq!(guard.log, vec!["look_around", "walk_to_post", "salute"]);
}

#[test]
fn failed_run_leaves_single_child_cursor_in_place() {
    let document = Element::new("Root").child(
        Element::new("Sequence")
            .attr("name", "hopeless")
            .child(action("give_up")),
    );
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    assert_eq!(processor.tick(&mut guard), Status::Failure);
    assert_eq!(processor.aborted_runs(), 1);
    assert_eq!(processor.tree().find("hopeless").map(|n| n.cursor()), Some(0));

    assert_eq!(processor.tick(&mut guard), Status::Failure);
    assert_eq!(processor.aborted_runs(), 2);
}

#[test]
fn failed_run_does_not_reset_progress() {
    let document = Element::new("Root").child(
        Element::new("Sequence")
            .attr("name", "attempt")
            .child(action("look_around"))
            .child(action("give_up")),
    );
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    assert_eq!(processor.tick(&mut guard), Status::Failure);
    assert_eq!(processor.tree().find("attempt").map(|n| n.cursor()), Some(1));

    // The next run picks the sequence up at the child that failed.
    assert_eq!(processor.tick(&mut guard), Status::Failure);
    assert_eq!(processor.tree().find("attempt").map(|n| n.cursor()), Some(1));
    assert_eq!(guard.log, vec!["look_around", "give_up", "give_up"]);
    assert_eq!(processor.completed_runs(), 0);
}

#[test]
fn top_level_children_form_an_implicit_sequence() {
    let document = Element::new("Root")
        .child(action("look_around"))
        .child(action("give_up"))
        .child(action("salute"));
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    for _ in 0..4 {
        processor.tick(&mut guard);
    }

    // salute is never reached: every run fails at give_up.
    assert_eq!(
        guard.log,
        vec!["look_around", "give_up", "look_around", "give_up"]
    );
    assert_eq!(processor.aborted_runs(), 2);
}

#[test]
fn selector_commitment_survives_failed_runs() {
    let document = Element::new("Root").child(
        Element::new("RandomSelector")
            .attr("name", "mood")
            .child(action("give_up"))
            .child(action("give_up").attr("name", "give_up_again")),
    );
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    processor.tick(&mut guard);
    let committed = processor.tree().find("mood").and_then(|n| n.pending());
    assert!(committed.is_some());

    for _ in 0..10 {
        assert_eq!(processor.tick(&mut guard), Status::Failure);
        assert_eq!(
            processor.tree().find("mood").and_then(|n| n.pending()),
            committed
        );
    }
}

#[test]
fn stopped_tree_keeps_its_state() {
    let document = Element::new("Root").child(
        Element::new("Sequence")
            .attr("name", "patrol")
            .child(action("look_around"))
            .child(action("walk_to_post")),
    );
    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    processor.tick(&mut guard);
    let tree = processor.stop();

    let patrol = tree.find("patrol").expect("patrol node");
    assert_eq!(patrol.kind(), NodeKind::Sequence);
    assert_eq!(patrol.cursor(), 1);
}

#[cfg(feature = "loaders")]
#[test]
fn ron_document_drives_an_agent() {
    let document = decision_tree::DocumentLoader::parse(
        r#"(
            tag: "Root",
            attributes: { "name": "guard" },
            children: [
                (tag: "Or", children: [
                    (tag: "Not", children: [
                        (tag: "Condition", attributes: { "method": "look_around" }),
                    ]),
                    (tag: "Action", attributes: { "method": "salute" }),
                ]),
            ],
        )"#,
    )
    .expect("valid RON");

    let mut processor = start_processing(build(&document));
    let mut guard = Guard::default();

    assert_eq!(processor.tick(&mut guard), Status::Success);
    assert_eq!(guard.log, vec!["look_around", "salute"]);
    assert_eq!(processor.completed_runs(), 1);
}
