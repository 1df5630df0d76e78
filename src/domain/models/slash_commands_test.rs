use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_plain_answer() {
    assert!(SlashCommand::parse("Java is object oriented").is_none());
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_history() {
    let cmd = SlashCommand::parse("/history").unwrap();
    assert!(cmd.is_history());
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}

#[test]
fn it_trims_whitespace() {
    let cmd = SlashCommand::parse("  /quit  ").unwrap();
    assert!(cmd.is_quit());
}
