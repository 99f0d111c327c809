//! End-to-end tests running command scripts through the public session API.

use std::{io::Cursor, thread};

use eyre::{Result, ensure};
use taskboard::{
    board::{
        domain::BoardLimits,
        services::{SharedBoard, SharedBoardError, Store},
    },
    command::{
        Command,
        adapters::io::{ReaderLineSource, TextSink},
        run_session,
    },
};

fn transcript(store: &mut Store, script: &str) -> Result<String> {
    let mut source = ReaderLineSource::new(Cursor::new(script.to_owned()));
    let mut sink = TextSink::new(Vec::new());
    run_session(store, &mut source, &mut sink)?;
    Ok(String::from_utf8(sink.into_inner())?)
}

#[test]
fn full_board_session_over_streams() -> Result<()> {
    let script = "\
a CODE REVIEW
t 8 implement parser
t 3 fix typo
u alice
u bob
n 2
m 2 bob IN PROGRESS
m 1 alice IN PROGRESS
n 1
m 2 bob CODE REVIEW
d IN PROGRESS
d CODE REVIEW
n 4
m 2 alice DONE
l
l 2 1
u
q
t 1 never created
";
    let mut store = Store::default();

    let output = transcript(&mut store, script)?;

    let expected = "\
task 1
task 2
2
3
1 2 implement parser
2 2 fix typo
7
duration=5 slack=2
2 DONE #3 fix typo
1 IN PROGRESS #8 implement parser
2 DONE #3 fix typo
1 IN PROGRESS #8 implement parser
alice
bob
";
    ensure!(output == expected, "unexpected transcript:\n{output}");
    ensure!(store.tasks().len() == 2);
    Ok(())
}

#[test]
fn end_of_input_ends_session_like_quit() -> Result<()> {
    let mut store = Store::default();
    let output = transcript(&mut store, "t 1 a\nn 2")?;
    ensure!(output == "task 1\n2\n");
    Ok(())
}

#[test]
fn configured_limits_bound_the_board() -> Result<()> {
    let limits: BoardLimits =
        serde_json::from_str(r#"{ "max_tasks": 2, "max_description_len": 5 }"#)?;
    let mut store = Store::new(limits);

    let output = transcript(&mut store, "t 1 short\nt 1 longer\nt 1 two\nt 1 three\n")?;

    ensure!(output == "task 1\ninvalid description\ntask 2\ntoo many tasks\n");
    Ok(())
}

#[test]
fn shared_board_serialises_concurrent_sessions() -> Result<()> {
    let board = SharedBoard::default();
    let register = board.clone();
    let writer = thread::spawn(move || -> Result<(), SharedBoardError> {
        for index in 0..20 {
            register.execute(Command::User {
                name: Some(format!("user{index}")),
            })?;
        }
        Ok(())
    });
    for index in 0..20 {
        board.execute(Command::CreateTask {
            duration: "1".to_owned(),
            description: format!("job {index}"),
        })?;
    }
    writer
        .join()
        .map_err(|_| eyre::eyre!("registration thread panicked"))??;

    let (users, tasks) = board.inspect(|store| (store.users().len(), store.tasks().len()))?;
    ensure!(users == 20);
    ensure!(tasks == 20);
    Ok(())
}
