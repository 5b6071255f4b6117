/// Conway's B3/S23 rule: the next state of a cell from its current state
/// and the number of live Moore neighbors (0..=8).
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}
