//! Joypad (P1, $FF00).
//!
//! Bits 5/4 select which row of four buttons is visible on bits 3-0 (0 =
//! selected, matching the active-low select lines); bits 3-0 read back
//! inverted (0 = pressed). Selecting both or neither row OR-reduces the two
//! rows together. A falling edge on any of the visible bits 3-0 raises the
//! Joypad interrupt, so held buttons never fire it, only new presses.

/// Bit layout used by [`Joypad::set_buttons`]: 0=Right,1=Left,2=Up,3=Down,
/// 4=A,5=B,6=Select,7=Start. A set bit means the button is held down.
#[derive(Debug, Default)]
pub struct Joypad {
    select_action: bool,
    select_direction: bool,
    buttons: u8,
    last_output: u8,
}

impl Joypad {
    pub fn new() -> Self {
        Self {
            select_action: false,
            select_direction: false,
            buttons: 0,
            last_output: 0x0F,
        }
    }

    fn output_nibble(&self) -> u8 {
        let mut bits = 0x0F;
        if self.select_direction {
            bits &= !(self.buttons & 0x0F);
        }
        if self.select_action {
            bits &= !((self.buttons >> 4) & 0x0F);
        }
        bits
    }

    pub fn read(&self) -> u8 {
        let select = (if self.select_action { 0 } else { 0x20 }) | (if self.select_direction { 0 } else { 0x10 });
        0xC0 | select | self.output_nibble()
    }

    pub fn write(&mut self, val: u8) {
        self.select_action = val & 0x20 == 0;
        self.select_direction = val & 0x10 == 0;
    }

    /// Update held-button state; returns true if this caused a falling edge
    /// on the currently visible nibble (i.e. an interrupt should fire).
    pub fn set_buttons(&mut self, state: u8) -> bool {
        self.buttons = state;
        let new_output = self.output_nibble();
        let fell = self.last_output & !new_output != 0;
        self.last_output = new_output;
        fell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_reads_all_high() {
        let jp = Joypad::new();
        assert_eq!(jp.read() & 0x0F, 0x0F);
    }

    #[test]
    fn direction_row_reads_pressed_bits_low() {
        let mut jp = Joypad::new();
        jp.write(0xEF); // select direction row (bit4=0)
        jp.set_buttons(0x01); // Right held
        assert_eq!(jp.read() & 0x0F, 0x0E);
    }

    #[test]
    fn action_row_reads_pressed_bits_low() {
        let mut jp = Joypad::new();
        jp.write(0xDF); // select action row (bit5=0)
        jp.set_buttons(0x10); // A held
        assert_eq!(jp.read() & 0x0F, 0x0E);
    }

    #[test]
    fn both_rows_selected_or_reduces() {
        let mut jp = Joypad::new();
        jp.write(0xCF); // both rows selected
        jp.set_buttons(0x01 | 0x10); // Right + A
        assert_eq!(jp.read() & 0x0F, 0x0E);
    }

    #[test]
    fn falling_edge_detected_on_new_press() {
        let mut jp = Joypad::new();
        jp.write(0xEF);
        assert!(!jp.set_buttons(0x00));
        assert!(jp.set_buttons(0x01));
        assert!(!jp.set_buttons(0x01)); // held, no new edge
    }

    #[test]
    fn unselected_row_ignores_presses() {
        let mut jp = Joypad::new();
        jp.write(0xDF); // action row selected, direction not
        assert!(!jp.set_buttons(0x01)); // Right held, but direction row hidden
        assert_eq!(jp.read() & 0x0F, 0x0F);
    }
}
