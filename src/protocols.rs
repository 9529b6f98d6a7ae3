use crate::framing::TransmissionModel;

/// A real-world protocol and the framing model it uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Protocol {
    /// Protocol name
    pub name: &'static str,
    /// Typical use
    pub usage: &'static str,
    /// Framing model
    pub model: TransmissionModel,
}

const fn protocol(name: &'static str, usage: &'static str, model: TransmissionModel) -> Protocol {
    Protocol { name, usage, model }
}

/// Common serial and bus protocols, grouped by framing model.
pub static PROTOCOLS: &[Protocol] = &[
    protocol("UART/RS-232", "Serial communication, modems", TransmissionModel::Asynchronous),
    protocol("RS-485", "Industrial control systems", TransmissionModel::Asynchronous),
    protocol("MIDI", "Musical instrument digital interface", TransmissionModel::Asynchronous),
    protocol("SPI", "High-speed peripheral communication", TransmissionModel::Synchronous),
    protocol("I2C", "Inter-chip communication", TransmissionModel::Synchronous),
    protocol("USB", "Universal Serial Bus", TransmissionModel::Synchronous),
    protocol("Ethernet", "Network communication", TransmissionModel::Synchronous),
    protocol("SATA", "Storage device interface", TransmissionModel::Synchronous),
];

/// Protocols using `model`, in catalog order.
pub fn protocols_for(model: TransmissionModel) -> impl Iterator<Item = &'static Protocol> {
    PROTOCOLS.iter().filter(move |p| p.model == model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_protocols_for() {
        let asynchronous: Vec<_> = protocols_for(TransmissionModel::Asynchronous)
            .map(|p| p.name)
            .collect();
        assert_eq!(asynchronous, ["UART/RS-232", "RS-485", "MIDI"]);

        let synchronous: Vec<_> = protocols_for(TransmissionModel::Synchronous)
            .map(|p| p.name)
            .collect();
        assert_eq!(synchronous, ["SPI", "I2C", "USB", "Ethernet", "SATA"]);
    }
}
