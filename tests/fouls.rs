use snooker_scoreboard::balls::Ball;
use snooker_scoreboard::config::{FoulAwardPolicy, FrameConfig};
use snooker_scoreboard::frame::{Frame, PotRequirement};
use snooker_scoreboard::player::PlayerId;

fn mk_frame(policy: FoulAwardPolicy, names: &[&str]) -> (Frame, Vec<PlayerId>) {
    let mut f = Frame::new(FrameConfig { foul_award_policy: policy, enforce_rules: true });
    let ids = names.iter().map(|n| f.add_player(n).unwrap()).collect();
    f.start().unwrap();
    (f, ids)
}

fn scores(f: &Frame) -> Vec<i32> {
    f.players().iter().map(|p| p.score()).collect()
}

#[test]
fn next_player_policy_pays_only_the_next_seat() {
    let (mut f, ids) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B", "C"]);
    f.apply_foul(-6).unwrap();
    assert_eq!(scores(&f), [0, 6, 0]);
    assert_eq!(f.foul_count(ids[0]), 1);
    assert_eq!(f.current(), 1);
}

#[test]
fn next_player_policy_wraps_from_the_last_seat() {
    let (mut f, _) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B", "C"]);
    f.advance_turn().unwrap();
    f.advance_turn().unwrap();
    f.apply_foul(-4).unwrap();
    assert_eq!(scores(&f), [4, 0, 0]);
    assert_eq!(f.current(), 0);
}

#[test]
fn all_players_policy_pays_everyone_including_the_offender() {
    let (mut f, ids) = mk_frame(FoulAwardPolicy::AllPlayers, &["A", "B", "C"]);
    f.apply_foul(-7).unwrap();
    assert_eq!(scores(&f), [7, 7, 7]);
    assert_eq!(f.foul_count(ids[0]), 1);
    assert_eq!(f.foul_count(ids[1]), 0);
}

#[test]
fn foul_sign_does_not_matter() {
    let (mut f, _) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B"]);
    f.apply_foul(5).unwrap();
    assert_eq!(scores(&f), [0, 5]);
}

#[test]
fn foul_ends_the_break_but_not_the_record() {
    let (mut f, ids) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B"]);
    f.pot(Ball::Red).unwrap();
    f.pot(Ball::Pink).unwrap();
    f.apply_foul(-4).unwrap();
    assert_eq!(f.current_break(ids[0]), 0);
    assert_eq!(f.highest_break(ids[0]), 7);
}

#[test]
fn foul_while_on_a_color_puts_reds_back_on() {
    let (mut f, _) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B"]);
    f.pot(Ball::Red).unwrap();
    assert_eq!(f.requirement(), PotRequirement::Color);
    f.apply_foul(-4).unwrap();
    assert_eq!(f.requirement(), PotRequirement::Red);
    assert_eq!(f.allowed_pots(), vec![Ball::Red]);
}

#[test]
fn fouls_are_allowed_even_after_the_colors_start() {
    let mut f = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
    f.add_player("A").unwrap();
    f.add_player("B").unwrap();
    f.start_from(0, PotRequirement::ColorSequence(2)).unwrap();
    f.apply_foul(-4).unwrap();
    assert_eq!(f.requirement(), PotRequirement::ColorSequence(2));
    assert_eq!(f.reds_remaining(), 0);
}

#[test]
fn off_table_red_is_taken_out_of_play() {
    let (mut f, ids) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B"]);
    assert!(f.can_use_off_table_foul());
    f.apply_off_table_foul().unwrap();
    assert_eq!(f.reds_remaining(), 14);
    assert_eq!(f.requirement(), PotRequirement::Red);
    assert_eq!(scores(&f), [0, 4]);
    assert_eq!(f.foul_count(ids[0]), 1);
    assert_eq!(f.current(), 1);
}

#[test]
fn off_table_color_in_the_clearance_costs_its_value() {
    let mut f = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
    f.add_player("A").unwrap();
    f.add_player("B").unwrap();
    f.start_from(0, PotRequirement::ColorSequence(4)).unwrap();
    f.apply_off_table_foul().unwrap();
    assert_eq!(scores(&f), [0, 6]);
    assert_eq!(f.requirement(), PotRequirement::ColorSequence(5));
}

#[test]
fn off_table_foul_needs_a_definite_ball_on() {
    let (mut f, _) = mk_frame(FoulAwardPolicy::NextPlayer, &["A", "B"]);
    f.pot(Ball::Red).unwrap();
    assert!(!f.can_use_off_table_foul());
    assert!(f.apply_off_table_foul().is_err());
    assert_eq!(f.history_len(), 1);
}
