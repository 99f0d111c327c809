//! Behavioural tests for the board command session.

use eyre::{Result, eyre};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use taskboard::{
    board::services::Store,
    command::{Command, CommandProcessor},
};

#[derive(Default)]
struct BoardWorld {
    store: Option<Store>,
    last_lines: Vec<String>,
}

impl BoardWorld {
    fn store(&mut self) -> Result<&mut Store> {
        self.store
            .as_mut()
            .ok_or_else(|| eyre!("board should be initialised"))
    }
}

#[fixture]
fn world() -> BoardWorld {
    BoardWorld::default()
}

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) {
    world.store = Some(Store::default());
    world.last_lines.clear();
}

#[when(r#"the operator enters "{line}""#)]
fn operator_enters(world: &mut BoardWorld, line: String) -> Result<()> {
    let store = world.store()?;
    let lines = Command::parse(&line).map_or_else(Vec::new, |command| {
        CommandProcessor::new()
            .execute(store, command)
            .replies
            .iter()
            .map(ToString::to_string)
            .collect()
    });
    world.last_lines = lines;
    Ok(())
}

#[then(r#"the last output is "{text}""#)]
fn last_output(world: &BoardWorld, text: String) -> Result<()> {
    let last = world
        .last_lines
        .last()
        .ok_or_else(|| eyre!("expected output from the last command"))?;
    assert_eq!(last, &text);
    Ok(())
}

#[then(r"the command produced {count:usize} lines")]
fn produced_lines(world: &BoardWorld, count: usize) {
    assert_eq!(world.last_lines.len(), count);
}

#[then(r"the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<()> {
    let store = world
        .store
        .as_ref()
        .ok_or_else(|| eyre!("board should be initialised"))?;
    assert_eq!(store.tasks().len(), count);
    Ok(())
}

#[scenario(
    path = "tests/features/board_session.feature",
    name = "A task moves from creation to completion"
)]
fn task_lifecycle(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_session.feature",
    name = "Started tasks cannot return to TO DO"
)]
fn no_return_to_to_do(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_session.feature",
    name = "Listing unknown identifiers fails as a whole"
)]
fn atomic_listing(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_session.feature",
    name = "Activities are listed with the built-ins first"
)]
fn activity_listing(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_session.feature",
    name = "Unknown verbs leave the board untouched"
)]
fn unknown_verbs(world: BoardWorld) {
    let _ = world;
}
