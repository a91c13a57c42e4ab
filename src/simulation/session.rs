//! Caller-owned context for one demo run
//!
//! A `Session` holds everything that used to live in module-level globals:
//! the current bodies, the pause flag, the speed multiplier, which screen is
//! showing and how many frames have run. Front ends translate their input
//! into `Command`s and call `tick` once per frame.
//!
//! Mode transitions:
//! - `Menu` + Start -> `Play`
//! - `Play` + Back  -> `Menu`
//! - any    + Quit  -> `Finished`

use std::time::Duration;

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu, // level 1: start / quit
    Play, // level 2: pause / faster / slower / back
    Finished,
}

/// User actions a front end can forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Quit,
    TogglePause,
    Faster,
    Slower,
    Back,
    Reset,
}

#[derive(Debug, Clone, Resource)]
pub struct Session {
    initial: Scenario, // kept for reset
    pub scenario: Scenario,
    pub mode: Mode,
    pub paused: bool,
    pub contacts: u64, // contacts resolved since start or last reset
}

impl Session {
    /// New session showing the menu
    pub fn new(scenario: Scenario) -> Self {
        Self {
            initial: scenario.clone(),
            scenario,
            mode: Mode::Menu,
            paused: false,
            contacts: 0,
        }
    }

    /// New session that skips the menu, as the plain bounce demos do
    pub fn playing(scenario: Scenario) -> Self {
        let mut session = Self::new(scenario);
        session.mode = Mode::Play;
        session
    }

    pub fn speed_scale(&self) -> f64 {
        self.scenario.parameters.speed_scale
    }

    pub fn frame(&self) -> u64 {
        self.scenario.system.frame
    }

    pub fn is_finished(&self) -> bool {
        self.mode == Mode::Finished
    }

    /// Apply a user command. Commands that do not fit the current mode are ignored.
    pub fn apply(&mut self, cmd: Command) {
        match (self.mode, cmd) {
            (Mode::Finished, _) => {}
            (_, Command::Quit) => {
                info!(frame = self.frame(), "quit");
                self.mode = Mode::Finished;
            }
            (_, Command::Reset) => self.reset(),
            (Mode::Menu, Command::Start) => {
                info!("start");
                self.mode = Mode::Play;
            }
            (Mode::Play, Command::Back) => {
                info!("back to menu");
                self.mode = Mode::Menu;
            }
            (Mode::Play, Command::TogglePause) => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
            }
            (Mode::Play, Command::Faster) => {
                let p = &mut self.scenario.parameters;
                p.speed_scale = p.clamp_speed(p.speed_scale * p.speed_factor);
                info!(speed_scale = p.speed_scale, "faster");
            }
            (Mode::Play, Command::Slower) => {
                let p = &mut self.scenario.parameters;
                p.speed_scale = p.clamp_speed(p.speed_scale / p.speed_factor);
                info!(speed_scale = p.speed_scale, "slower");
            }
            (mode, cmd) => debug!(?mode, ?cmd, "command ignored"),
        }
    }

    /// Restore the initial bodies, speed and pause state; the mode is kept
    pub fn reset(&mut self) {
        self.scenario = self.initial.clone();
        self.paused = false;
        self.contacts = 0;
        info!("reset");
    }

    /// Advance one frame if the session is playing and not paused.
    /// Returns whether the bodies moved.
    pub fn tick(&mut self) -> bool {
        if self.mode != Mode::Play || self.paused {
            return false;
        }

        let Scenario { bounds, parameters, engine, system } = &mut self.scenario;
        let contacts = advance(system, *bounds, parameters, engine);
        if contacts > 0 {
            debug!(frame = system.frame, contacts, "collision");
        }
        self.contacts += contacts as u64;
        true
    }

    /// True once `elapsed` wall time has reached the bail-out limit
    pub fn expired(&self, elapsed: Duration) -> bool {
        match self.scenario.parameters.bailout {
            Some(limit) => elapsed >= limit,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::scenario::Preset;

    #[test]
    fn menu_does_not_advance() {
        let mut s = Session::new(Scenario::preset(Preset::Bounce));
        assert!(!s.tick());
        assert_eq!(s.frame(), 0);

        s.apply(Command::Start);
        assert!(s.tick());
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn play_only_commands_are_ignored_in_menu() {
        let mut s = Session::new(Scenario::preset(Preset::TwoCollide));
        s.apply(Command::Faster);
        s.apply(Command::TogglePause);
        assert_eq!(s.speed_scale(), 1.0);
        assert!(!s.paused);
        assert_eq!(s.mode, Mode::Menu);
    }

    #[test]
    fn back_returns_to_menu_and_quit_is_final() {
        let mut s = Session::playing(Scenario::preset(Preset::TwoCollide));
        s.apply(Command::Back);
        assert_eq!(s.mode, Mode::Menu);

        s.apply(Command::Quit);
        assert!(s.is_finished());
        s.apply(Command::Start);
        assert!(s.is_finished());
        assert!(!s.tick());
    }

    #[test]
    fn bailout_limit() {
        let s = Session::new(Scenario::preset(Preset::Bounce));
        assert!(!s.expired(Duration::from_secs(29)));
        assert!(s.expired(Duration::from_secs(30)));

        let mut forever = Scenario::preset(Preset::Bounce);
        forever.parameters.bailout = None;
        assert!(!Session::new(forever).expired(Duration::from_secs(3600)));
    }
}
