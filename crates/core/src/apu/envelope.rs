//! Envelope generator for volume control.
//!
//! The envelope generator provides automatic volume fade-out for pulse and noise channels.

/// Envelope generator component.
/// 
/// Provides automatic volume control with decay from 15 to 0.
/// Can also be used for constant volume mode.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Start flag (set when a note is triggered)
    start_flag: bool,
    /// Decay level counter (0-15)
    decay_level: u8,
    /// Divider counter
    divider: u8,
    /// Divider period (reload value from register)
    period: u8,
    /// Loop flag (restart envelope when it reaches 0)
    loop_flag: bool,
    /// Initial volume loaded at trigger time (Game Boy NRx2 bits 7-4)
    initial_volume: u8,
    /// Direction: true = add (increase), false = subtract (decrease)
    add_mode: bool,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            start_flag: false,
            decay_level: 0,
            divider: 0,
            period: 0,
            loop_flag: false,
            initial_volume: 0,
            add_mode: false,
        }
    }

    /// Clock the envelope (called by frame counter at ~240Hz NTSC, or on
    /// step 7 of the Game Boy's 512Hz frame sequencer)
    pub fn clock(&mut self) {
        if self.period == 0 {
            return;
        }
        if self.start_flag {
            self.start_flag = false;
            self.decay_level = self.initial_volume;
            self.divider = self.period;
        } else if self.divider > 0 {
            self.divider -= 1;
            if self.divider == 0 {
                self.divider = self.period;
                if self.add_mode {
                    if self.decay_level < 15 {
                        self.decay_level += 1;
                    } else if self.loop_flag {
                        self.decay_level = 0;
                    }
                } else if self.decay_level > 0 {
                    self.decay_level -= 1;
                } else if self.loop_flag {
                    self.decay_level = 15;
                }
            }
        }
    }

    /// Get the current decay level (0-15)
    pub fn level(&self) -> u8 {
        self.decay_level
    }

    /// Restart the envelope
    pub fn restart(&mut self) {
        self.start_flag = true;
    }

    /// Set the period (divider reload value)
    pub fn set_period(&mut self, period: u8) {
        self.period = period & 0x0F;
    }

    /// Set the loop flag
    pub fn set_loop(&mut self, loop_flag: bool) {
        self.loop_flag = loop_flag;
    }

    /// Volume and direction loaded from the initial-volume/add-mode/period register
    /// (e.g. Game Boy NR12/NR22/NR42). Does not restart the envelope by itself.
    pub fn set_params(&mut self, initial_volume: u8, add_mode: bool, period: u8) {
        self.initial_volume = initial_volume & 0x0F;
        self.add_mode = add_mode;
        self.period = period & 0x07;
    }

    /// Initial volume last loaded via `set_params`
    pub fn initial_volume(&self) -> u8 {
        self.initial_volume
    }

    /// Direction last loaded via `set_params` (true = increase)
    pub fn add_mode(&self) -> bool {
        self.add_mode
    }

    /// Divider period last loaded via `set_params`
    pub fn period(&self) -> u8 {
        self.period
    }

    /// Reload the decay level from the initial volume and arm the divider.
    /// Called when the owning channel is triggered.
    pub fn trigger(&mut self) {
        self.decay_level = self.initial_volume;
        self.divider = self.period;
        self.start_flag = false;
    }

    /// Current output volume (0-15), alias of `level`
    pub fn volume(&self) -> u8 {
        self.decay_level
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_trigger_sets_level_to_initial_volume() {
        let mut env = Envelope::new();
        env.set_params(15, false, 1);
        env.trigger();
        assert_eq!(env.level(), 15);
    }

    #[test]
    fn envelope_decays_to_zero() {
        let mut env = Envelope::new();
        env.set_params(15, false, 1); // Decrease, period 1
        env.trigger();

        // Clock until decay reaches 0 (15 steps, then one more no-op clock)
        for _ in 0..16 {
            env.clock();
        }
        assert_eq!(env.level(), 0);
    }

    #[test]
    fn envelope_loops_when_flag_set() {
        let mut env = Envelope::new();
        env.set_params(15, false, 1);
        env.set_loop(true);
        env.trigger();

        assert_eq!(env.level(), 15);

        // Decay down to 0 (15 clocks: 14, 13, ..., 1, 0)
        for expected in (0..15).rev() {
            env.clock();
            assert_eq!(env.level(), expected);
        }

        // Next clock should loop back to 15
        env.clock();
        assert_eq!(env.level(), 15);
    }

    #[test]
    fn envelope_period_controls_decay_rate() {
        let mut env = Envelope::new();
        env.set_params(15, false, 2); // Slower decay
        env.trigger(); // level = 15, divider = 2

        env.clock(); // divider = 1
        assert_eq!(env.level(), 15); // Should not decay yet

        env.clock(); // divider reloads, decay happens
        assert_eq!(env.level(), 14); // Now decayed
    }

    #[test]
    fn envelope_period_zero_disables_automatic_adjustment() {
        let mut env = Envelope::new();
        env.set_params(15, false, 0);
        env.trigger();

        for _ in 0..10 {
            env.clock();
        }
        assert_eq!(env.level(), 15);
    }

    #[test]
    fn envelope_add_mode_increases_volume() {
        let mut env = Envelope::new();
        env.set_params(0, true, 1);
        env.trigger();

        env.clock();
        assert_eq!(env.level(), 1);
        env.clock();
        assert_eq!(env.level(), 2);
    }
}
