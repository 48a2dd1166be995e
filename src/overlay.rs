//! Information overlay shown on top of the simulation

use std::fmt;

use atom_simulation::Phase;

/// Key bindings shown permanently in the info panel
pub const CONTROLS: [&str; 2] = [
    "Space: New Matter | P: Pause | R: Reset",
    "H: Help | G: Gravity",
];

/// Contents of the help screen
pub const HELP_LINES: [&str; 13] = [
    "• Atoms interact through charge, van der Waals attraction and gravity",
    "• Atoms close to each other can form chemical bonds",
    "• Each element has its own mass, charge and colour",
    "• White lines are chemical bonds",
    "• Solids move slowly, gases move fast",
    "• Gravity pulls less on fast gas atoms",
    "",
    "CONTROLS:",
    "• Space: add a random piece of matter",
    "• P: pause / resume the simulation",
    "• R: reset the simulation",
    "• G: toggle gravity",
    "• H: show / hide this help screen",
];

/// Snapshot of the host state for the info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub atom_count: usize,
    /// World atom cap
    pub max_atoms: usize,
    pub bond_count: usize,
    pub gravity_on: bool,
    pub paused: bool,
    pub show_help: bool,
    pub tick: u64,
}

impl Overlay {
    /// Lines of the info panel, top to bottom
    pub fn panel_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Atoms: {}", self.atom_count),
            format!("Chemical Bonds: {}", self.bond_count),
            format!("Gravity: {}", if self.gravity_on { "On" } else { "Off" }),
        ];
        lines.extend(CONTROLS.iter().map(|s| s.to_string()));
        if self.paused {
            lines.push("PAUSED".to_string());
        }
        lines
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {} | atoms {}/{} | bonds {} | gravity {}{}",
            self.tick,
            self.atom_count,
            self.max_atoms,
            self.bond_count,
            if self.gravity_on { "on" } else { "off" },
            if self.paused { " | paused" } else { "" }
        )
    }
}

/// What the renderer draws for one matter group: its region tint and atoms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub phase: Phase,
    pub atoms: usize,
    /// RGBA region tint
    pub tint: [u8; 4],
    /// Colour of the group's first atom, if any survived the cap
    pub color: Option<[u8; 3]>,
    pub element: Option<String>,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} x{} tint {:?}", self.phase, self.atoms, self.tint)?;
        if let (Some(element), Some(color)) = (&self.element, self.color) {
            write!(f, " | {element} {color:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lines() {
        let overlay = Overlay {
            atom_count: 12,
            max_atoms: 1500,
            bond_count: 3,
            gravity_on: false,
            paused: true,
            show_help: false,
            tick: 7,
        };
        let lines = overlay.panel_lines();
        assert_eq!(lines[0], "Atoms: 12");
        assert_eq!(lines[1], "Chemical Bonds: 3");
        assert_eq!(lines[2], "Gravity: Off");
        assert_eq!(lines.last().unwrap(), "PAUSED");
        assert_eq!(
            overlay.to_string(),
            "tick 7 | atoms 12/1500 | bonds 3 | gravity off | paused"
        );
    }

    #[test]
    fn test_group_summary_display() {
        let mut summary = GroupSummary {
            phase: Phase::Gas,
            atoms: 40,
            tint: Phase::Gas.tint(),
            color: None,
            element: None,
        };
        assert_eq!(summary.to_string(), "Gas x40 tint [200, 200, 100, 70]");

        summary.color = Some([255, 50, 50]);
        summary.element = Some("Oxygen".to_string());
        assert_eq!(
            summary.to_string(),
            "Gas x40 tint [200, 200, 100, 70] | Oxygen [255, 50, 50]"
        );
    }
}
