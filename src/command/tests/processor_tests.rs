//! Unit tests for command dispatch and reply rendering.

use crate::{
    board::{
        domain::{ErrorKind, TaskId},
        services::Store,
    },
    command::{Command, CommandProcessor, Execution, Flow, Reply},
};
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> Store {
    Store::default()
}

fn run(store: &mut Store, line: &str) -> eyre::Result<Execution> {
    let command = Command::parse(line).ok_or_else(|| eyre::eyre!("unparsed line: {line}"))?;
    Ok(CommandProcessor::new().execute(store, command))
}

fn lines(execution: &Execution) -> Vec<String> {
    execution.replies.iter().map(ToString::to_string).collect()
}

#[rstest]
fn create_task_replies_with_id(mut store: Store) -> eyre::Result<()> {
    ensure!(lines(&run(&mut store, "t 5 write report")?) == ["task 1"]);
    ensure!(lines(&run(&mut store, "t 0 instant")?) == ["task 2"]);
    Ok(())
}

#[rstest]
#[case("t x write", "invalid duration")]
#[case("t 5", "invalid description")]
#[case("l 9", "9: no such task")]
#[case("n -1", "invalid time")]
#[case("a lower", "invalid description")]
#[case("a DONE", "duplicate activity")]
#[case("m 1 alice DONE", "no such task")]
#[case("d LIMBO", "no such activity")]
fn rejected_commands_reply_with_one_message(
    mut store: Store,
    #[case] line: &str,
    #[case] message: &str,
) -> eyre::Result<()> {
    let execution = run(&mut store, line)?;
    ensure!(execution.flow == Flow::Continue);
    ensure!(lines(&execution) == [message], "{line} gave {:?}", lines(&execution));
    ensure!(execution.replies.iter().all(Reply::is_error));
    Ok(())
}

#[rstest]
fn list_rows_render_activity_and_duration(mut store: Store) -> eyre::Result<()> {
    run(&mut store, "t 5 write report")?;
    run(&mut store, "t 2 buy milk")?;

    let all = run(&mut store, "l")?;
    let picked = run(&mut store, "l 1 1")?;

    ensure!(lines(&all) == ["2 TO DO #2 buy milk", "1 TO DO #5 write report"]);
    ensure!(lines(&picked) == ["1 TO DO #5 write report", "1 TO DO #5 write report"]);
    Ok(())
}

#[rstest]
fn list_with_bad_token_emits_only_error(mut store: Store) -> eyre::Result<()> {
    run(&mut store, "t 5 write report")?;
    let execution = run(&mut store, "l 1 nope")?;
    ensure!(lines(&execution) == ["nope: no such task"]);
    Ok(())
}

#[rstest]
fn clock_replies_with_reading(mut store: Store) -> eyre::Result<()> {
    ensure!(lines(&run(&mut store, "n")?) == ["0"]);
    ensure!(lines(&run(&mut store, "n 3")?) == ["3"]);
    ensure!(lines(&run(&mut store, "n 5 6")?) == ["invalid time"]);
    ensure!(lines(&run(&mut store, "n")?) == ["3"]);
    Ok(())
}

#[rstest]
fn registrations_are_silent_and_listed_in_order(mut store: Store) -> eyre::Result<()> {
    ensure!(run(&mut store, "u bob")?.replies.is_empty());
    ensure!(run(&mut store, "u alice")?.replies.is_empty());
    ensure!(run(&mut store, "a QA")?.replies.is_empty());

    ensure!(lines(&run(&mut store, "u")?) == ["bob", "alice"]);
    ensure!(lines(&run(&mut store, "a")?) == ["TO DO", "IN PROGRESS", "DONE", "QA"]);
    ensure!(lines(&run(&mut store, "u bob")?) == ["user already exists"]);
    Ok(())
}

#[rstest]
fn move_to_done_reports_spent_and_slack(mut store: Store) -> eyre::Result<()> {
    run(&mut store, "t 5 write report")?;
    run(&mut store, "u alice")?;
    run(&mut store, "n 3")?;

    ensure!(run(&mut store, "m 1 alice IN PROGRESS")?.replies.is_empty());
    run(&mut store, "n 4")?;
    let done = run(&mut store, "m 1 alice DONE")?;

    ensure!(
        done.replies
            == [Reply::Completed {
                spent: 4,
                slack: -1,
            }]
    );
    ensure!(lines(&done) == ["duration=4 slack=-1"]);
    ensure!(lines(&run(&mut store, "d DONE")?) == ["1 3 write report"]);
    ensure!(lines(&run(&mut store, "l")?) == ["1 DONE #5 write report"]);
    Ok(())
}

#[rstest]
fn move_back_to_to_do_is_rejected(mut store: Store) -> eyre::Result<()> {
    run(&mut store, "t 1 tidy")?;
    run(&mut store, "u alice")?;
    let execution = run(&mut store, "m 1 alice TO DO")?;
    ensure!(lines(&execution) == ["task already started"]);
    ensure!(lines(&run(&mut store, "d TO DO")?) == ["1 0 tidy"]);
    Ok(())
}

#[rstest]
fn quit_stops_without_output(mut store: Store) -> eyre::Result<()> {
    let execution = run(&mut store, "q")?;
    ensure!(execution.flow == Flow::Quit);
    ensure!(execution.replies.is_empty());
    Ok(())
}

#[test]
fn replies_serialize_with_type_tag() -> eyre::Result<()> {
    let created = serde_json::to_value(Reply::TaskCreated { id: TaskId::new(7) })?;
    ensure!(created == serde_json::json!({ "type": "task_created", "id": 7 }));

    let failed = serde_json::to_value(Reply::Error {
        kind: ErrorKind::NotFound,
        message: "no such task".to_owned(),
    })?;
    ensure!(
        failed
            == serde_json::json!({
                "type": "error",
                "kind": "not_found",
                "message": "no such task",
            })
    );
    Ok(())
}
