mod common;

use common::{drive, named_game, WINNING_ROUTE};
use doorway::adventure::{
    AdventureError, Game, RoomId, RoomTable, ScriptedInput, Severity, Transcript, BUILDING_KEY,
    COMMAND_PROMPT, INVALID_INPUT, NAME_PROMPT,
};

#[test]
fn winning_route_visits_every_room_in_order() {
    let mut game = Game::new(RoomTable::standard());
    let mut input = ScriptedInput::new(WINNING_ROUTE);
    let mut out = Transcript::new();

    let mut key_after = None;
    let mut window_after = None;
    for (i, cmd) in WINNING_ROUTE.iter().enumerate() {
        game.step(&mut input, &mut out).unwrap();
        if *cmd == "take key" {
            key_after = Some(i);
            assert!(game.status().has_key(BUILDING_KEY));
        }
        if *cmd == "open window" {
            window_after = Some(i);
            assert!(game.status().window_open);
        }
        if i < key_after.unwrap_or(usize::MAX) {
            assert!(!game.status().has_key(BUILDING_KEY));
        }
        if i < window_after.unwrap_or(usize::MAX) {
            assert!(!game.status().window_open);
        }
    }

    assert!(game.is_finished());
    assert_eq!(game.current_room(), RoomId::Exit);
    assert_eq!(
        game.path(),
        &[
            RoomId::Start,
            RoomId::A,
            RoomId::B,
            RoomId::B,
            RoomId::A,
            RoomId::C,
            RoomId::C,
            RoomId::C,
            RoomId::Exit,
        ]
    );
    assert_eq!(game.turns(), 7);
    assert_eq!(input.remaining(), 0);
    // Trying the closed window is the only mistake on the route.
    assert_eq!(out.errors(), vec!["The window is closed."]);
}

#[test]
fn loop_stops_at_exit_and_leaves_extra_input() {
    let mut game = named_game("Ada");
    let mut commands = WINNING_ROUTE.to_vec();
    commands.push("west");
    commands.push("dance");
    let mut input = ScriptedInput::new(commands);
    let mut out = Transcript::new();
    game.run_rooms(&mut input, &mut out).unwrap();
    assert_eq!(input.remaining(), 2);
    assert_eq!(game.turns(), 7);
}

#[test]
fn full_session_greets_and_congratulates() {
    let mut lines = vec!["", "Ada"];
    lines.extend(WINNING_ROUTE);
    let mut input = ScriptedInput::new(lines);
    let mut out = Transcript::new();

    let summary = Game::new(RoomTable::standard())
        .run(&mut input, &mut out)
        .unwrap();

    assert_eq!(summary.player_name, "Ada");
    assert_eq!(summary.turns, 7);
    assert_eq!(summary.path.last(), Some(&RoomId::Exit));
    assert!(summary.status.window_open);
    assert!(summary.status.has_key(BUILDING_KEY));

    let text: Vec<&str> = out.lines().iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(text[0], "Welcome to the text adventure!");
    assert_eq!(text[1], NAME_PROMPT);
    assert_eq!(text[2], INVALID_INPUT);
    assert_eq!(text[3], "Hello, Ada.");
    assert_eq!(text[4], "You are in a building. Your goal is to exit this building.");
    assert_eq!(
        text[5],
        "You are in an empty room. There are doors on the north and west walls of this room."
    );
    assert_eq!(text[text.len() - 2], "You have exited the building. You win!");
    assert_eq!(text[text.len() - 1], "Congratulations, Ada!");
    assert_eq!(out.count(COMMAND_PROMPT), 7);
    assert!(out
        .lines()
        .iter()
        .all(|(s, l)| *s == Severity::Warning || (l != NAME_PROMPT && l != COMMAND_PROMPT)));
}

#[test]
fn repeated_failures_describe_room_once() {
    let mut game = named_game("Ada");
    let (out, result) = drive(&mut game, &["dance", "sing"]);
    assert!(matches!(result, Err(AdventureError::InputClosed)));
    assert_eq!(
        out.count("You are in an empty room. There are doors on the north and west walls of this room."),
        1
    );
    assert_eq!(out.count("Unrecognized command."), 2);
}

#[test]
fn returning_to_a_room_describes_it_again() {
    let mut game = named_game("Ada");
    let (out, _) = drive(&mut game, &["west", "east"]);
    assert_eq!(
        out.count("You are in an empty room. There are doors on the north and west walls of this room."),
        2
    );
}

#[test]
fn key_no_longer_on_table_after_taking_it() {
    let mut game = named_game("Ada");
    let (out, _) = drive(&mut game, &["west", "take key", "east", "west"]);
    assert_eq!(out.count("On the table there is a key."), 1);
    assert_eq!(out.count("You go through the west door. You are in a room with a table."), 2);
}

#[test]
fn running_out_of_input_is_input_closed() {
    let mut game = named_game("Ada");
    let (_, result) = drive(&mut game, &["west", "take key"]);
    assert!(matches!(result, Err(AdventureError::InputClosed)));
    assert_eq!(game.current_room(), RoomId::B);
    assert!(!game.is_finished());
}

#[test]
fn long_name_is_accepted_as_typed() {
    let long = "n".repeat(40);
    let mut lines = vec![long.as_str(), " ", "Ada"];
    lines.extend(WINNING_ROUTE);
    let mut input = ScriptedInput::new(lines);
    let mut out = Transcript::new();

    let summary = Game::new(RoomTable::standard())
        .run(&mut input, &mut out)
        .unwrap();

    assert_eq!(summary.player_name, long);
    assert!(out.contains(&format!("Hello, {}.", long)));
    assert_eq!(out.count(NAME_PROMPT), 1);
    // The spare " " and "Ada" lines reach room A as commands.
    assert_eq!(out.count("Unrecognized command."), 2);
    assert_eq!(summary.turns, 9);
    assert_eq!(summary.path.last(), Some(&RoomId::Exit));
}
