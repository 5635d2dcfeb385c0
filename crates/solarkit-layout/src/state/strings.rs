//! String creation and removal.

use tracing::debug;
use uuid::Uuid;

use solarkit_core::{LayoutError, Result};

use super::LayoutState;
use crate::model::PanelString;

impl LayoutState {
    /// Creates a string from an ordered list of panels wired into one
    /// combiner box.
    ///
    /// The first panel is the positive end, the last the negative end.
    /// Requires at least two distinct panels, all of which must exist,
    /// and a live combiner box. Strings are immutable after creation
    /// except for removal.
    pub fn try_create_string(
        &mut self,
        panel_ids: &[Uuid],
        combiner_box_id: Uuid,
    ) -> Result<Uuid> {
        if panel_ids.len() < 2 {
            return Err(LayoutError::InsufficientPanels {
                count: panel_ids.len(),
            });
        }
        for (i, id) in panel_ids.iter().enumerate() {
            if panel_ids[..i].contains(id) {
                return Err(LayoutError::DuplicatePanel { id: *id });
            }
            if self.panel(*id).is_none() {
                return Err(LayoutError::PanelNotFound { id: *id });
            }
        }
        if self.combiner_box(combiner_box_id).is_none() {
            return Err(LayoutError::CombinerBoxNotFound {
                id: combiner_box_id,
            });
        }

        let id = Uuid::new_v4();
        let number = self.next_string_number;
        self.strings.push(PanelString {
            id,
            number,
            panels: panel_ids.to_vec(),
            combiner_box_id,
        });
        self.next_string_number += 1;
        debug!(string = number, panels = panel_ids.len(), "created string");
        Ok(id)
    }

    /// Removes a string.
    pub fn remove_string(&mut self, id: Uuid) -> Result<()> {
        let len = self.strings.len();
        self.strings.retain(|s| s.id != id);
        if self.strings.len() == len {
            return Err(LayoutError::StringNotFound { id });
        }
        debug!(%id, "removed string");
        Ok(())
    }
}
