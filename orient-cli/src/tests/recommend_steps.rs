//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{InputFiles, output_string};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Aggregates recommend scenario state so each step takes a single world.
struct RecommendWorld {
    files: InputFiles,
    answers: RefCell<String>,
    outcome: RefCell<Option<Result<String, CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            files: InputFiles::new(),
            answers: RefCell::new(String::new()),
            outcome: RefCell::new(None),
        }
    }

    fn run(&self, argv: &[&str]) {
        let mut invocation = vec!["orient", "recommend"];
        invocation.extend_from_slice(argv);
        let answers = self.answers.borrow().clone();
        let mut output = Vec::new();
        let outcome = Cli::try_parse_from(invocation)
            .map_err(CliError::ArgumentParsing)
            .and_then(|cli| {
                dispatch(
                    cli.command,
                    &mut answers.as_bytes(),
                    &mut std::io::sink(),
                    &mut output,
                )
            })
            .map(|()| output_string(output));
        self.outcome.replace(Some(outcome));
    }

    fn report(&self) -> String {
        let borrowed = self.outcome.borrow();
        borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect("expected success")
            .clone()
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a profile file and a catalog file on disk")]
fn files_exist(#[from(world)] world: &RecommendWorld) {
    assert!(world.files.profile().is_file());
    assert!(world.files.catalog().is_file());
}

#[given("interview answers for an engineering student")]
fn engineering_answers(#[from(world)] world: &RecommendWorld) {
    world
        .answers
        .replace("Alice\n16\n14\n\n12\n\n\ninformatique, algorithmes\ningénieur\n".to_owned());
}

#[given("a profile path that does not exist")]
fn missing_profile(#[from(world)] world: &RecommendWorld) {
    assert!(!world.files.root().join("ghost.json").exists());
}

#[when("I run the recommend command with both files")]
fn run_with_files(#[from(world)] world: &RecommendWorld) {
    let profile = world.files.profile();
    let catalog = world.files.catalog();
    world.run(&[
        "--profile",
        profile.as_str(),
        "--catalog",
        catalog.as_str(),
    ]);
}

#[when("I run the recommend command without a profile")]
fn run_with_interview(#[from(world)] world: &RecommendWorld) {
    world.run(&["--top-k", "2"]);
}

#[when("I run the recommend command with the missing profile")]
fn run_with_missing_profile(#[from(world)] world: &RecommendWorld) {
    let ghost = world.files.root().join("ghost.json");
    world.run(&["--profile", ghost.as_str()]);
}

#[then("the report ranks \"Informatique\" above \"Lettres\"")]
fn ranks_informatique_first(#[from(world)] world: &RecommendWorld) {
    let report = world.report();
    let info = report.find("- Informatique (Sciences)").expect("info listed");
    let lettres = report.find("- Lettres (Lettres)").expect("lettres listed");
    assert!(info < lettres);
}

#[then("the report starts with the engineering program")]
fn engineering_first(#[from(world)] world: &RecommendWorld) {
    let report = world.report();
    assert!(report.starts_with(
        "Top recommendations for Alice:\n\n- Cycle Prépa + Ingénieur Informatique (Informatique)"
    ));
    assert_eq!(report.matches("Fitness score").count(), 2);
}

#[then("the CLI reports that the \"profile\" file is missing")]
fn reports_missing_profile(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.outcome.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_PROFILE),
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(
    recommending_from_files,
    "recommending from profile and catalog files"
);
register_recommend_scenario!(
    recommending_after_interview,
    "recommending from the built-in catalog after an interview"
);
register_recommend_scenario!(
    rejecting_missing_profile,
    "rejecting a missing profile file"
);
