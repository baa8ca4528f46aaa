// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/machine.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// Host-state providers. Platforms with a screen-lock probe supply their own
// MachineStater; this one reports a state chosen up front.
//
// Tree Location:
// - src/miner/machine.rs (host-state providers)
// - Depends on: crate::miner

use super::{MachineStater, MachineState};

/// Always reports the same machine state
#[derive(Debug, Clone, Copy)]
pub struct FixedMachineState {
    state: MachineState,
}

impl FixedMachineState {
    pub fn new(state: MachineState) -> Self {
        Self { state }
    }

    /// Host treated as in use; saver mode never mines
    pub fn active() -> Self {
        Self::new(MachineState::Active)
    }
}

impl Default for FixedMachineState {
    fn default() -> Self {
        Self::active()
    }
}

impl MachineStater for FixedMachineState {
    fn machine_state(&self) -> MachineState {
        self.state
    }
}
