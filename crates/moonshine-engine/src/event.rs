//! Events reported by the engine

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A page finished loading (or failed to)
    LoadFinished { success: bool, address: String },
    /// The surface moved to a new address
    AddressChanged { address: String },
    /// The document title changed
    TitleChanged { title: String },
}

impl SurfaceEvent {
    /// Address carried by the event, if any
    pub fn address(&self) -> Option<&str> {
        match self {
            SurfaceEvent::LoadFinished { address, .. } | SurfaceEvent::AddressChanged { address } => {
                Some(address.as_str())
            }
            SurfaceEvent::TitleChanged { .. } => None,
        }
    }
}
