//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::maze::{Direction, Tile};
use super::movement::advance;
use super::pathfinding::first_step_toward;
use super::state::{Fruit, GamePhase, GameState, GhostMode};
use crate::audio::{AudioBus, AudioCue};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direction intent; `None` leaves the buffered turn untouched
    pub direction: Direction,
}

/// One-shot control signals, consumed (cleared) by `apply_controls`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub restart: bool,
}

/// Fixed tile where fruit appears
pub const FRUIT_TILE: Tile = Tile::new(9, 10);

/// Buffer a turn for the player
pub fn set_player_direction(state: &mut GameState, direction: Direction) {
    state.player.next_dir = direction;
}

/// Reinitialize everything for a new round and start playing
pub fn reset_round(state: &mut GameState) {
    let fresh = GameState::with_round_length(state.maze.clone(), state.round_seconds);
    *state = GameState {
        phase: GamePhase::Playing,
        message: String::new(),
        ..fresh
    };
    log::info!(
        "Round started: {} pellets, {:.0}s on the clock",
        state.pellets.len(),
        state.round_seconds
    );
}

/// Process start/pause/restart once per frame, before ticks are drained
pub fn apply_controls(state: &mut GameState, controls: &mut Controls) {
    if std::mem::take(&mut controls.start)
        && matches!(state.phase, GamePhase::Title | GamePhase::GameOver)
    {
        reset_round(state);
        return;
    }

    if std::mem::take(&mut controls.pause) {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.message = "Paused".to_string();
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.message.clear();
            }
            _ => {}
        }
    }

    // Nothing but un-pause gets through while paused
    if state.phase == GamePhase::Paused {
        return;
    }

    if std::mem::take(&mut controls.restart) {
        reset_round(state);
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, audio: &mut AudioBus) {
    if input.direction != Direction::None {
        set_player_direction(state, input.direction);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    advance_clock(state, dt);
    update_speed_phase(state, audio);

    if state.time_left <= 0.0 {
        end_round(state, "Time Up! Press R to Restart", audio);
        return;
    }

    advance_mode_timer(state, dt, audio);
    update_frightened(state, dt);

    state.player.speed = PLAYER_SPEED * state.speed_multiplier;
    advance(&mut state.player, &state.maze, dt);

    consume_pellets(state, audio);
    update_fruit(state);
    move_ghosts(state, dt);
    handle_fruit_pickup(state, audio);
    handle_collisions(state, audio);

    if state.pellets.is_empty() {
        state.phase = GamePhase::GameOver;
        state.message = "Clear! Press R to Play Again".to_string();
        log::info!("Maze cleared with score {}", state.score.score);
    }
}

fn advance_clock(state: &mut GameState, dt: f32) {
    state.elapsed += f64::from(dt);
    state.time_left = (f64::from(state.round_seconds) - state.elapsed).max(0.0) as f32;
}

/// Multiplier for the remaining round time
pub fn speed_multiplier_for(time_left: f32) -> f32 {
    if time_left <= FINAL_THRESHOLD {
        FINAL_MULTIPLIER
    } else if time_left <= LATE_THRESHOLD {
        LATE_MULTIPLIER
    } else {
        1.0
    }
}

fn update_speed_phase(state: &mut GameState, audio: &mut AudioBus) {
    let previous = state.speed_multiplier;
    state.speed_multiplier = speed_multiplier_for(state.time_left);
    if previous != state.speed_multiplier {
        log::debug!(
            "Speed multiplier {} -> {} at {:.1}s left",
            previous,
            state.speed_multiplier,
            state.time_left
        );
        audio.emit(AudioCue::PhaseShift);
    }
}

fn end_round(state: &mut GameState, message: &str, audio: &mut AudioBus) {
    state.phase = GamePhase::GameOver;
    state.message = message.to_string();
    log::info!("{} (score {})", message, state.score.score);
    audio.emit(AudioCue::GameOver);
}

fn advance_mode_timer(state: &mut GameState, dt: f32, audio: &mut AudioBus) {
    if !state.schedule.advance(dt) {
        return;
    }
    let mode = state.schedule.current_mode();
    log::debug!("Mode pattern entry {} ({:?})", state.schedule.index, mode);
    for ghost in &mut state.ghosts {
        if matches!(ghost.mode, GhostMode::Scatter | GhostMode::Chase) {
            ghost.mode = mode;
        }
    }
    audio.emit(AudioCue::PhaseShift);
}

fn update_frightened(state: &mut GameState, dt: f32) {
    if state.frightened_timer <= 0.0 {
        return;
    }
    state.frightened_timer = (state.frightened_timer - dt).max(0.0);
    if state.frightened_timer <= 0.0 {
        let mode = state.schedule.current_mode();
        for ghost in &mut state.ghosts {
            if ghost.mode == GhostMode::Frightened {
                ghost.mode = mode;
            }
        }
    }
}

fn consume_pellets(state: &mut GameState, audio: &mut AudioBus) {
    let tile = state.player.tile;
    if state.pellets.remove(&tile) {
        state.score.award_pellet();
        audio.emit(AudioCue::Pellet);
    }
    if state.power_pellets.remove(&tile) {
        state.score.award_power_pellet();
        state.frightened_timer = FRIGHTENED_SECONDS;
        for ghost in &mut state.ghosts {
            if ghost.mode != GhostMode::Eaten {
                ghost.mode = GhostMode::Frightened;
            }
        }
        audio.emit(AudioCue::PowerUp);
    }
}

fn update_fruit(state: &mut GameState) {
    if let Some(fruit) = &mut state.fruit {
        fruit.ttl -= FRUIT_TTL_DRAIN;
        if fruit.ttl <= 0.0 {
            state.fruit = None;
        }
        return;
    }

    // Narrow bands so a fruit spawns once, not on every tick inside the band
    let ratio = state.pellet_ratio();
    let value = if ratio < 0.70 && ratio > 0.68 {
        FRUIT_EARLY_POINTS
    } else if ratio < 0.35 && ratio > 0.33 {
        FRUIT_LATE_POINTS
    } else {
        return;
    };
    log::debug!("Fruit worth {} spawned at {:.2} pellet ratio", value, ratio);
    state.fruit = Some(Fruit {
        tile: FRUIT_TILE,
        value,
        ttl: FRUIT_TTL,
    });
}

fn move_ghosts(state: &mut GameState, dt: f32) {
    let pattern_mode = state.schedule.current_mode();
    let corners = state.maze.corners();
    let player_tile = state.player.tile;

    for index in 0..state.ghosts.len() {
        // Leader position is read after earlier ghosts moved this tick
        let leader_tile = index.checked_sub(1).map(|i| state.ghosts[i].tile());
        let maze = &state.maze;
        let ghost = &mut state.ghosts[index];

        if ghost.mode == GhostMode::Eaten {
            ghost.respawn_timer -= dt;
            ghost.mover.next_dir = first_step_toward(maze, ghost.tile(), ghost.home);
            ghost.mover.speed = GHOST_EATEN_SPEED;
            advance(&mut ghost.mover, maze, dt);
            if ghost.respawn_timer <= 0.0 || ghost.tile() == ghost.home {
                ghost.mode = pattern_mode;
            }
            continue;
        }

        let base = if ghost.mode == GhostMode::Frightened {
            GHOST_FRIGHTENED_SPEED
        } else {
            GHOST_SPEED
        };
        ghost.mover.speed = base * state.speed_multiplier;

        ghost.mover.next_dir = if ghost.mode == GhostMode::Frightened {
            frightened_direction(state.elapsed as f32, index)
        } else {
            let target = if pattern_mode == GhostMode::Scatter {
                corners[index % corners.len()]
            } else {
                leader_tile.unwrap_or(player_tile)
            };
            first_step_toward(maze, ghost.tile(), target)
        };
        advance(&mut ghost.mover, maze, dt);
    }
}

/// Deterministic wander direction for a frightened ghost.
///
/// Derived only from elapsed simulation time and ghost rank so a given
/// time sequence always replays identically.
pub fn frightened_direction(elapsed: f32, index: usize) -> Direction {
    let options = Direction::SEARCH_ORDER;
    let slot = ((elapsed * 100.0 + index as f32 * 7.0) % options.len() as f32).floor();
    options
        .get(slot as usize)
        .copied()
        .unwrap_or(Direction::Left)
}

fn handle_fruit_pickup(state: &mut GameState, audio: &mut AudioBus) {
    let Some(fruit) = &state.fruit else {
        return;
    };
    if fruit.tile == state.player.tile {
        state.score.award_fruit(fruit.value);
        state.fruit = None;
        audio.emit(AudioCue::Fruit);
    }
}

fn handle_collisions(state: &mut GameState, audio: &mut AudioBus) {
    let player_tile = state.player.tile;
    let mut caught = false;

    for ghost in &mut state.ghosts {
        if ghost.tile() != player_tile {
            continue;
        }
        match ghost.mode {
            GhostMode::Frightened => {
                ghost.mode = GhostMode::Eaten;
                ghost.respawn_timer = RESPAWN_SECONDS;
                let points = state.score.award_ghost_capture(ghost.train_index);
                state.message = format!("Chain +{points}");
                log::debug!("Ghost {} captured for {}", ghost.id, points);
                audio.emit(AudioCue::GhostEat);
            }
            GhostMode::Eaten => {}
            GhostMode::Scatter | GhostMode::Chase => caught = true,
        }
    }

    if caught {
        end_round(state, "Caught! Press R to Restart", audio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::recording_bus;
    use crate::sim::maze::Maze;
    use glam::IVec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Maze::classic().expect("classic layout parses"));
        reset_round(&mut state);
        state
    }

    fn step(state: &mut GameState, audio: &mut AudioBus) {
        tick(state, &TickInput::default(), SIM_DT, audio);
    }

    #[test]
    fn test_title_phase_does_not_tick() {
        let mut state = GameState::new(Maze::classic().expect("classic layout parses"));
        let (mut audio, _) = recording_bus();
        step(&mut state, &mut audio);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_start_resets_into_playing() {
        let mut state = GameState::new(Maze::classic().expect("classic layout parses"));
        let mut controls = Controls {
            start: true,
            ..Default::default()
        };
        apply_controls(&mut state, &mut controls);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.message.is_empty());
        assert_eq!(controls, Controls::default());
    }

    #[test]
    fn test_pause_toggle_and_restart_held_while_paused() {
        let mut state = playing_state();
        let mut controls = Controls {
            pause: true,
            restart: true,
            ..Default::default()
        };
        apply_controls(&mut state, &mut controls);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.message, "Paused");
        // Restart stays pending while paused
        assert!(controls.restart);

        let (mut audio, _) = recording_bus();
        step(&mut state, &mut audio);
        assert_eq!(state.elapsed, 0.0);

        controls.pause = true;
        apply_controls(&mut state, &mut controls);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!controls.restart);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = playing_state();
        let (mut audio, _) = recording_bus();
        step(&mut state, &mut audio);
        let elapsed = state.elapsed;

        let mut controls = Controls {
            start: true,
            ..Default::default()
        };
        apply_controls(&mut state, &mut controls);
        assert!(!controls.start);
        assert_eq!(state.elapsed, elapsed);
    }

    #[test]
    fn test_pellet_consumed_once() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        let tile = IVec2::new(8, 18);
        assert!(state.pellets.contains(&tile));

        state.player.tile = tile;
        consume_pellets(&mut state, &mut audio);
        consume_pellets(&mut state, &mut audio);

        assert_eq!(state.score.score, PELLET_POINTS);
        assert!(!state.pellets.contains(&tile));
        assert_eq!(*cues.borrow(), vec![AudioCue::Pellet]);
    }

    #[test]
    fn test_power_pellet_frightens_ghosts() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        state.ghosts[3].mode = GhostMode::Eaten;
        state.player.tile = IVec2::new(1, 3);

        consume_pellets(&mut state, &mut audio);

        // Power pellets are also regular pellet spawns
        assert_eq!(state.score.score, PELLET_POINTS + POWER_PELLET_POINTS);
        assert_eq!(state.frightened_timer, FRIGHTENED_SECONDS);
        assert!(state.ghosts[..3].iter().all(|g| g.mode == GhostMode::Frightened));
        assert_eq!(state.ghosts[3].mode, GhostMode::Eaten);
        assert_eq!(*cues.borrow(), vec![AudioCue::Pellet, AudioCue::PowerUp]);
    }

    #[test]
    fn test_frightened_expiry_reverts_to_pattern_mode() {
        let mut state = playing_state();
        state.ghosts[0].mode = GhostMode::Frightened;
        state.ghosts[1].mode = GhostMode::Eaten;
        state.schedule.index = 1;
        state.frightened_timer = 0.01;

        update_frightened(&mut state, SIM_DT);

        assert_eq!(state.frightened_timer, 0.0);
        assert_eq!(state.ghosts[0].mode, GhostMode::Chase);
        assert_eq!(state.ghosts[1].mode, GhostMode::Eaten);
    }

    #[test]
    fn test_speed_multiplier_bands() {
        assert_eq!(speed_multiplier_for(180.0), 1.0);
        assert_eq!(speed_multiplier_for(90.5), 1.0);
        assert_eq!(speed_multiplier_for(90.0), LATE_MULTIPLIER);
        assert_eq!(speed_multiplier_for(45.5), LATE_MULTIPLIER);
        assert_eq!(speed_multiplier_for(45.0), FINAL_MULTIPLIER);
        assert_eq!(speed_multiplier_for(0.5), FINAL_MULTIPLIER);
    }

    #[test]
    fn test_time_up_ends_round() {
        let mut state = GameState::with_round_length(
            Maze::classic().expect("classic layout parses"),
            0.02,
        );
        reset_round(&mut state);
        let (mut audio, cues) = recording_bus();

        step(&mut state, &mut audio);
        assert_eq!(state.phase, GamePhase::Playing);
        step(&mut state, &mut audio);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_left, 0.0);
        assert_eq!(state.message, "Time Up! Press R to Restart");
        // The multiplier jumps straight into the final band on the first tick
        assert_eq!(
            *cues.borrow(),
            vec![AudioCue::PhaseShift, AudioCue::GameOver]
        );
    }

    #[test]
    fn test_capture_frightened_ghost() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        let player_tile = state.player.tile;
        state.ghosts[1].mover.tile = player_tile;
        state.ghosts[1].mode = GhostMode::Frightened;
        state.frightened_timer = FRIGHTENED_SECONDS;

        step(&mut state, &mut audio);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ghosts[1].mode, GhostMode::Eaten);
        assert_eq!(state.ghosts[1].respawn_timer, RESPAWN_SECONDS);
        assert_eq!(state.score.score, 400);
        assert_eq!(state.message, "Chain +400");
        assert!(cues.borrow().contains(&AudioCue::GhostEat));
    }

    #[test]
    fn test_touching_hunting_ghost_ends_round() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        state.ghosts[0].mover.tile = state.player.tile;

        step(&mut state, &mut audio);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, "Caught! Press R to Restart");
        assert_eq!(cues.borrow().last(), Some(&AudioCue::GameOver));
    }

    #[test]
    fn test_eaten_ghost_revives_when_countdown_expires() {
        let mut state = playing_state();
        let (mut audio, _) = recording_bus();
        state.ghosts[2].mode = GhostMode::Eaten;
        state.ghosts[2].mover.tile = IVec2::new(1, 1);
        state.ghosts[2].respawn_timer = SIM_DT / 2.0;

        step(&mut state, &mut audio);

        assert_eq!(state.ghosts[2].mode, GhostMode::Scatter);
        assert_eq!(state.ghosts[2].mover.speed, GHOST_EATEN_SPEED);
    }

    #[test]
    fn test_clearing_last_pellet_ends_round() {
        let mut state = playing_state();
        let (mut audio, _) = recording_bus();
        let tile = state.player.tile;
        state.pellets = [tile].into_iter().collect();
        state.power_pellets.clear();

        step(&mut state, &mut audio);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, "Clear! Press R to Play Again");
    }

    #[test]
    fn test_fruit_spawns_inside_band_only() {
        let mut state = playing_state();
        let keep: Vec<Tile> = state.maze.pellet_spawns()[..99].to_vec();
        state.pellets = keep.iter().copied().collect();

        update_fruit(&mut state);
        let fruit = state.fruit.clone().expect("fruit spawns at 99/144");
        assert_eq!(fruit.value, FRUIT_EARLY_POINTS);
        assert_eq!(fruit.tile, FRUIT_TILE);

        state.fruit = None;
        state.pellets = keep[..49].iter().copied().collect();
        update_fruit(&mut state);
        assert_eq!(state.fruit.as_ref().map(|f| f.value), Some(FRUIT_LATE_POINTS));

        state.fruit = None;
        state.pellets = keep[..60].iter().copied().collect();
        update_fruit(&mut state);
        assert!(state.fruit.is_none());
    }

    #[test]
    fn test_fruit_expires_and_pickup_scores() {
        let mut state = playing_state();
        state.fruit = Some(Fruit {
            tile: FRUIT_TILE,
            value: 200,
            ttl: FRUIT_TTL_DRAIN,
        });
        update_fruit(&mut state);
        assert!(state.fruit.is_none());

        let (mut audio, cues) = recording_bus();
        state.fruit = Some(Fruit {
            tile: state.player.tile,
            value: 500,
            ttl: FRUIT_TTL,
        });
        handle_fruit_pickup(&mut state, &mut audio);
        assert!(state.fruit.is_none());
        assert_eq!(state.score.score, 500);
        assert_eq!(*cues.borrow(), vec![AudioCue::Fruit]);
    }

    #[test]
    fn test_frightened_direction_is_deterministic() {
        assert_eq!(frightened_direction(0.0, 0), Direction::Up);
        assert_eq!(frightened_direction(0.0, 1), Direction::Right);
        assert_eq!(frightened_direction(0.25, 0), Direction::Left);
        assert_eq!(frightened_direction(0.5, 0), Direction::Down);
        assert_eq!(frightened_direction(1.5, 2), frightened_direction(1.5, 2));
    }

    #[test]
    fn test_reset_restores_full_sets() {
        let mut state = playing_state();
        let (mut audio, _) = recording_bus();
        for _ in 0..120 {
            step(&mut state, &mut audio);
        }
        state.pellets.clear();
        state.power_pellets.clear();
        state.score.award_fruit(500);

        reset_round(&mut state);

        let spawns: std::collections::HashSet<Tile> =
            state.maze.pellet_spawns().iter().copied().collect();
        let powers: std::collections::HashSet<Tile> =
            state.maze.power_pellets().iter().copied().collect();
        assert_eq!(state.pellets, spawns);
        assert_eq!(state.power_pellets, powers);
        assert_eq!(state.score.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.schedule.index, 0);
    }

    #[test]
    fn test_direction_intent_buffers_turn() {
        let mut state = playing_state();
        let (mut audio, _) = recording_bus();
        let input = TickInput {
            direction: Direction::Right,
        };
        tick(&mut state, &input, SIM_DT, &mut audio);
        assert_eq!(state.player.next_dir, Direction::Right);
        assert_eq!(state.player.dir, Direction::Right);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing_state();
        let mut state2 = playing_state();
        let (mut audio1, cues1) = recording_bus();
        let (mut audio2, cues2) = recording_bus();

        let inputs = [Direction::Right, Direction::None, Direction::Up, Direction::Left];
        for i in 0..600 {
            let input = TickInput {
                direction: inputs[(i / 30) % inputs.len()],
            };
            tick(&mut state1, &input, SIM_DT, &mut audio1);
            tick(&mut state2, &input, SIM_DT, &mut audio2);
        }

        assert_eq!(state1, state2);
        assert_eq!(*cues1.borrow(), *cues2.borrow());
    }

    #[test]
    fn test_round_clock_hits_bands_on_exact_ticks() {
        let mut state = playing_state();
        let mut ticks = 0;
        let mut run_to = |state: &mut GameState, target: u32| {
            while ticks < target {
                advance_clock(state, SIM_DT);
                ticks += 1;
            }
        };

        run_to(&mut state, 5399);
        assert_eq!(speed_multiplier_for(state.time_left), 1.0);
        run_to(&mut state, 5400);
        assert_eq!(speed_multiplier_for(state.time_left), LATE_MULTIPLIER);
        run_to(&mut state, 8099);
        assert_eq!(speed_multiplier_for(state.time_left), LATE_MULTIPLIER);
        run_to(&mut state, 8100);
        assert_eq!(speed_multiplier_for(state.time_left), FINAL_MULTIPLIER);
        run_to(&mut state, 10_799);
        assert!(state.time_left > 0.0);
        run_to(&mut state, 10_800);
        assert_eq!(state.time_left, 0.0);
    }

    #[test]
    fn test_scatter_ghosts_head_for_their_corners() {
        let mut state = playing_state();
        let before: Vec<Tile> = state.ghosts.iter().map(|g| g.tile()).collect();
        let corners = state.maze.corners();

        move_ghosts(&mut state, SIM_DT);

        for (i, ghost) in state.ghosts.iter().enumerate() {
            assert_eq!(
                ghost.mover.next_dir,
                first_step_toward(&state.maze, before[i], corners[i]),
                "ghost {i}"
            );
        }
    }

    #[test]
    fn test_chase_ghosts_follow_player_then_leader() {
        let mut state = playing_state();
        state.schedule.index = 1;
        for ghost in &mut state.ghosts {
            ghost.mode = GhostMode::Chase;
        }
        let before: Vec<Tile> = state.ghosts.iter().map(|g| g.tile()).collect();
        let player_tile = state.player.tile;

        move_ghosts(&mut state, SIM_DT);

        assert_eq!(
            state.ghosts[0].mover.next_dir,
            first_step_toward(&state.maze, before[0], player_tile)
        );
        for i in 1..state.ghosts.len() {
            // The leader has already moved this tick and does not move again
            let leader = state.ghosts[i - 1].tile();
            assert_eq!(
                state.ghosts[i].mover.next_dir,
                first_step_toward(&state.maze, before[i], leader),
                "ghost {i}"
            );
        }
    }

    #[test]
    fn test_pattern_advance_switches_hunting_ghosts() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        state.ghosts[2].mode = GhostMode::Frightened;
        state.frightened_timer = FRIGHTENED_SECONDS;
        state.ghosts[3].mode = GhostMode::Eaten;
        state.ghosts[3].respawn_timer = RESPAWN_SECONDS;
        state.ghosts[3].mover.tile = IVec2::new(1, 1);
        state.schedule.timer = 7.0 - f64::from(SIM_DT) / 2.0;

        step(&mut state, &mut audio);

        assert_eq!(state.schedule.index, 1);
        assert_eq!(state.ghosts[0].mode, GhostMode::Chase);
        assert_eq!(state.ghosts[1].mode, GhostMode::Chase);
        assert_eq!(state.ghosts[2].mode, GhostMode::Frightened);
        assert_eq!(state.ghosts[3].mode, GhostMode::Eaten);
        assert_eq!(*cues.borrow(), vec![AudioCue::PhaseShift]);
    }

    #[test]
    fn test_eaten_ghost_revives_on_reaching_home() {
        let mut state = playing_state();
        let home = state.ghosts[0].home;
        let ghost = &mut state.ghosts[0];
        ghost.mode = GhostMode::Eaten;
        ghost.respawn_timer = RESPAWN_SECONDS;
        ghost.mover.tile = home - IVec2::X;
        ghost.mover.dir = Direction::Right;
        ghost.mover.move_progress = 0.0;

        for _ in 0..20 {
            move_ghosts(&mut state, SIM_DT);
            if state.ghosts[0].mode != GhostMode::Eaten {
                break;
            }
        }

        assert_eq!(state.ghosts[0].tile(), home);
        assert_eq!(state.ghosts[0].mode, GhostMode::Scatter);
        assert!(state.ghosts[0].respawn_timer > 0.0);
    }

    #[test]
    fn test_catch_wins_over_same_tick_capture() {
        let mut state = playing_state();
        let (mut audio, cues) = recording_bus();
        let player_tile = state.player.tile;
        state.ghosts[0].mover.tile = player_tile;
        state.ghosts[1].mover.tile = player_tile;
        state.ghosts[1].mode = GhostMode::Frightened;
        state.ghosts[2].mover.tile = player_tile;

        handle_collisions(&mut state, &mut audio);

        assert_eq!(state.ghosts[1].mode, GhostMode::Eaten);
        assert_eq!(state.score.score, 400);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, "Caught! Press R to Restart");
        assert_eq!(*cues.borrow(), vec![AudioCue::GhostEat, AudioCue::GameOver]);
    }
}
