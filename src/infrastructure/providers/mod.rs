pub mod libre;
pub mod offline;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::ProviderBox;
use crate::domain::models::ProviderName;

pub struct ProviderManager {}

impl ProviderManager {
    pub fn get(name: ProviderName) -> Result<ProviderBox> {
        if name == ProviderName::Libre {
            return Ok(Box::<libre::Libre>::default());
        }

        if name == ProviderName::Offline {
            return Ok(Box::<offline::Offline>::default());
        }

        bail!(format!("No provider implemented for {name}"))
    }
}
