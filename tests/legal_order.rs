use snooker_scoreboard::balls::{Ball, COLOR_SEQUENCE};
use snooker_scoreboard::config::FrameConfig;
use snooker_scoreboard::frame::{Frame, FrameError, Phase, PotRequirement};

fn enforced() -> Frame {
    let mut f = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
    f.add_player("John").unwrap();
    f.add_player("Anna").unwrap();
    f.start().unwrap();
    f
}

#[test]
fn red_and_color_alternate_while_reds_remain() {
    let mut f = enforced();
    assert_eq!(f.allowed_pots(), vec![Ball::Red]);
    f.pot(Ball::Red).unwrap();
    assert_eq!(f.allowed_pots(), COLOR_SEQUENCE.to_vec());
    assert_eq!(f.pot(Ball::Red), Err(FrameError::BallNotOn(Ball::Red)));
    f.pot(Ball::Brown).unwrap();
    assert_eq!(f.requirement(), PotRequirement::Red);
    assert_eq!(f.reds_remaining(), 14);
}

#[test]
fn maximum_style_clearance_ends_the_frame() {
    let mut f = enforced();
    for _ in 0..14 {
        f.pot(Ball::Red).unwrap();
        f.pot(Ball::Black).unwrap();
    }
    f.pot(Ball::Red).unwrap();
    assert_eq!(f.reds_remaining(), 0);
    assert_eq!(f.requirement(), PotRequirement::ColorSequence(0));

    for (i, ball) in COLOR_SEQUENCE.iter().copied().enumerate() {
        assert_eq!(f.allowed_pots(), vec![ball]);
        if let Some(next) = COLOR_SEQUENCE.get(i + 1).copied() {
            assert_eq!(f.pot(next), Err(FrameError::BallNotOn(next)));
        }
        f.pot(ball).unwrap();
    }

    assert_eq!(f.phase(), Phase::Ended);
    let john = f.players()[0].id();
    assert_eq!(f.players()[0].score(), 140);
    assert_eq!(f.highest_break(john), 140);
    assert!(f.allowed_pots().is_empty());
}

#[test]
fn colors_drop_off_the_table_in_order() {
    let mut f = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
    f.add_player("John").unwrap();
    f.add_player("Anna").unwrap();
    f.start_from(0, PotRequirement::ColorSequence(0)).unwrap();
    assert!(f.is_color_on_table(Ball::Yellow));
    f.pot(Ball::Yellow).unwrap();
    f.pot(Ball::Green).unwrap();
    assert!(!f.is_color_on_table(Ball::Yellow));
    assert!(!f.is_color_on_table(Ball::Green));
    assert!(f.is_color_on_table(Ball::Brown));
    assert!(!f.is_color_on_table(Ball::Red));
}

#[test]
fn ball_on_tracks_the_requirement() {
    let mut f = enforced();
    assert_eq!(f.current_ball_on().map(|on| on.ball), Some(Ball::Red));
    f.pot(Ball::Red).unwrap();
    assert_eq!(f.current_ball_on(), None);
    f.pot(Ball::Yellow).unwrap();
    assert_eq!(f.current_ball_on().map(|on| on.points), Some(1));
}

#[test]
fn without_rules_anything_goes() {
    let mut f = Frame::default();
    f.add_player("John").unwrap();
    f.add_player("Anna").unwrap();
    f.start().unwrap();
    assert!(f.allowed_pots().is_empty());
    f.pot(Ball::Black).unwrap();
    f.pot(Ball::Black).unwrap();
    f.apply_pot(Ball::Pink, 10).unwrap();
    assert_eq!(f.players()[0].score(), 24);
    assert!(f.game_started());
}

#[test]
fn undo_reopens_a_finished_frame() {
    let mut f = Frame::new(FrameConfig { enforce_rules: true, ..FrameConfig::default() });
    f.add_player("John").unwrap();
    f.add_player("Anna").unwrap();
    f.start_from(0, PotRequirement::ColorSequence(5)).unwrap();
    f.pot(Ball::Black).unwrap();
    assert!(f.game_over());

    f.undo_last_action().unwrap();
    assert!(f.game_started());
    assert_eq!(f.requirement(), PotRequirement::ColorSequence(5));
    assert_eq!(f.players()[0].score(), 0);
}
