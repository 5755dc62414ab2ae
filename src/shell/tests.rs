//! Dispatch and completion tests

use super::*;
use anyhow::bail;
use clap::{Arg, ArgAction};

fn toks(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn demo_shell() -> Shell {
    let mut shell = Shell::with_default_commands("demo");
    shell.add_cmd(
        Cmd::new("greet")
            .alias("hi")
            .help("Greet someone")
            .flag(
                Arg::new("loud")
                    .short('l')
                    .long("loud")
                    .action(ArgAction::SetTrue)
                    .help("Shout the greeting"),
            )
            .handler(|ctx| {
                let mut greeting = format!("hello {}", ctx.args().join(" "));
                if ctx.get_flag("loud") {
                    greeting = greeting.to_uppercase();
                }
                ctx.println(greeting)?;
                Ok(())
            }),
    );
    shell.add_cmd(
        Cmd::new("db")
            .help("Database commands")
            .subcommand(Cmd::new("migrate").help("Run migrations").handler(|ctx| {
                ctx.println(format!("migrating {:?}", ctx.raw_args()))?;
                Ok(())
            }))
            .subcommand(Cmd::new("seed").help("Seed data")),
    );
    shell.add_cmd(Cmd::new("fail").handler(|_| bail!("boom")));
    shell
}

fn run(shell: &mut Shell, tokens: &[&str]) -> (Result<Dispatch>, String) {
    let mut out = Vec::new();
    let result = shell.dispatch(&toks(tokens), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_dispatch_empty_input() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &[]);
    assert_eq!(result.unwrap(), Dispatch::Empty);
    assert!(out.is_empty());
}

#[test]
fn test_dispatch_runs_handler_with_flags() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["greet", "--loud", "bob"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(out, "HELLO BOB\n");
}

#[test]
fn test_dispatch_by_alias() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["hi", "ann"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(out, "hello ann\n");
}

#[test]
fn test_flags_reset_between_dispatches() {
    let mut shell = demo_shell();
    run(&mut shell, &["greet", "-l", "a"]).0.unwrap();
    let (_, out) = run(&mut shell, &["greet", "b"]);
    assert_eq!(out, "hello b\n");
}

#[test]
fn test_dispatch_unknown_command() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["bogus", "x"]);
    match result {
        Err(Error::UnknownCommand(name)) => assert_eq!(name, "bogus"),
        other => panic!("expected unknown command, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_dispatch_flag_error() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["greet", "--bogus"]);
    assert!(matches!(result, Err(Error::FlagParse { ref command, .. }) if command == "greet"));
    assert!(out.is_empty());

    let flags = shell.root().child("greet").unwrap().flag_set().unwrap();
    assert!(flags.error_output().contains("--bogus"));
}

#[test]
fn test_dispatch_nested_without_flags_keeps_raw_args() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["db", "migrate", "--to", "7"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(out, "migrating [\"--to\", \"7\"]\n");
}

#[test]
fn test_dispatch_group_without_handler_prints_help() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["db"]);
    assert_eq!(result.unwrap(), Dispatch::Help);
    assert!(out.starts_with("Database commands\n"));
    assert!(out.contains("demo db [options]"));
    assert!(out.contains("migrate"));
    assert!(out.contains("seed"));
}

#[test]
fn test_dispatch_handler_error() {
    let mut shell = demo_shell();
    let (result, _) = run(&mut shell, &["fail"]);
    match result {
        Err(Error::Handler(err)) => assert_eq!(err.to_string(), "boom"),
        other => panic!("expected handler error, got {other:?}"),
    }
    assert!(shell.is_active());
}

#[test]
fn test_exit_and_quit_stop_the_shell() {
    for name in ["exit", "quit"] {
        let mut shell = demo_shell();
        let (result, _) = run(&mut shell, &[name]);
        assert_eq!(result.unwrap(), Dispatch::Stopped);
        assert!(!shell.is_active());
    }
}

#[test]
fn test_help_prints_root_help() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["help"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(out, format!("{}\n", shell.help_text()));
    assert!(out.starts_with("Display help\n\nUsage:\n    demo [options]\n"));
    for name in ["clear", "db", "exit", "fail", "greet", "help", "quit"] {
        assert!(out.contains(name), "missing {name}");
    }
}

#[test]
fn test_context_help_text_is_root_help_from_nested_command() {
    let mut shell = demo_shell();
    shell.add_cmd(
        Cmd::new("docs").help("Documentation").subcommand(
            Cmd::new("index")
                .help("Show the index")
                .handler(|ctx| {
                    let text = ctx.help_text();
                    ctx.println(text)?;
                    Ok(())
                }),
        ),
    );

    let (result, out) = run(&mut shell, &["docs", "index"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert_eq!(out, format!("{}\n", shell.help_text()));
    assert!(out.starts_with("Display help\n\nUsage:\n    demo [options]\n"));
    assert!(!out.contains("demo index [options]"));
}

#[test]
fn test_help_for_named_command() {
    let mut shell = demo_shell();
    let (result, out) = run(&mut shell, &["help", "greet"]);
    assert_eq!(result.unwrap(), Dispatch::Handled);
    assert!(out.starts_with("Greet someone\n"));
    assert!(out.contains("-l, --loud"));

    let (result, _) = run(&mut shell, &["help", "nope"]);
    assert!(matches!(result, Err(Error::Handler(_))));
}

#[test]
fn test_clear_writes_escape_sequence() {
    let mut shell = demo_shell();
    let (_, out) = run(&mut shell, &["clear"]);
    assert!(out.starts_with("\x1b[2J"));
}

#[test]
fn test_delete_default_command() {
    let mut shell = demo_shell();
    assert!(shell.delete_cmd("clear").is_some());
    let (result, _) = run(&mut shell, &["clear"]);
    assert!(matches!(result, Err(Error::UnknownCommand(_))));
}

#[test]
fn test_complete_root_and_nested() {
    let shell = demo_shell();
    assert_eq!(shell.complete(&[], "g"), vec!["greet"]);
    assert_eq!(shell.complete(&toks(&["db"]), ""), vec!["migrate", "seed"]);
    assert_eq!(shell.complete(&toks(&["db"]), "s"), vec!["seed"]);
    // unresolvable input completes against the root
    assert_eq!(shell.complete(&toks(&["zzz"]), "q"), vec!["quit"]);
}

#[test]
fn test_complete_uses_custom_completer() {
    let mut shell = Shell::with_default_commands("demo");
    shell.add_cmd(
        Cmd::new("checkout").completer(|_| vec!["main".to_string(), "dev".to_string()]),
    );
    assert_eq!(shell.complete(&toks(&["checkout"]), "m"), vec!["main"]);
}

#[test]
fn test_from_config_without_defaults() {
    let config = ShellConfig {
        name: "bare".to_string(),
        default_commands: false,
    };
    let shell = Shell::from_config(&config);
    assert_eq!(shell.name(), "bare");
    assert!(shell.root().children().is_empty());
}

#[test]
fn test_shell_ref_identity() {
    let shell = demo_shell();
    let shell_ref = shell.shell_ref();
    assert!(shell_ref.is_root(shell.root()));
    assert!(!shell_ref.is_root(shell.root().child("help").unwrap()));
    assert_eq!(shell_ref.name(), "demo");
}
