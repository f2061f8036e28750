//! Identity Request fan-out to output ports.

use midiscope_decode::identity_request;

use crate::error::{Error, Result};

/// An output port the monitor can send SysEx to.
pub trait OutputTarget {
    fn name(&self) -> &str;

    fn is_connected(&self) -> bool;

    fn send(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Send one Identity Request to every connected target.
///
/// Targets that fail are logged and skipped. Returns how many sends succeeded.
pub fn broadcast_identity_request<'a, I>(targets: I, device_id: u8) -> Result<usize>
where
    I: IntoIterator<Item = &'a mut dyn OutputTarget>,
{
    let request = identity_request(device_id)?;
    let mut connected = 0;
    let mut sent = 0;

    for target in targets {
        if !target.is_connected() {
            continue;
        }
        connected += 1;
        match target.send(&request) {
            Ok(()) => {
                tracing::debug!(output = target.name(), device_id, "identity request sent");
                sent += 1;
            }
            Err(e) => {
                tracing::warn!(output = target.name(), error = %e, "identity request failed");
            }
        }
    }

    if connected == 0 {
        return Err(Error::NoOutputTargets);
    }
    Ok(sent)
}
