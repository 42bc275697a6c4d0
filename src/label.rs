/// Builds the three label lines for one slice: player id, win rate, and the
/// signed deviation from the uniform-chance baseline `1/n`. The deviation
/// only gains a `+` when the player is strictly above baseline.
pub fn label_lines(player: usize, rate: f64, num_players: usize) -> Vec<String> {
    let above_mean = rate - 1.0 / num_players as f64;
    let mut deviation = format!("{:.1}", above_mean * 100.0);
    if above_mean > 0.0 {
        deviation.insert(0, '+');
    }
    vec![
        format!("P{player}"),
        format!("WR {:.1}%", rate * 100.0),
        format!("({deviation}%)"),
    ]
}
