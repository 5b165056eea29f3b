//! Lead record shapes matching the hosted tables.

use serde::{Deserialize, Serialize};

use crate::calculator::{RoiInputs, RoiProjection};

/// Monthly patient volume bracket offered on the contact form. Closed set;
/// persistence stores a representative integer, not the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeBucket {
    Under100,
    From100To300,
    From300To600,
    Over600,
}

impl VolumeBucket {
    pub const ALL: [VolumeBucket; 4] = [
        VolumeBucket::Under100,
        VolumeBucket::From100To300,
        VolumeBucket::From300To600,
        VolumeBucket::Over600,
    ];

    /// The label shown in the select control (and received back from it).
    pub fn label(self) -> &'static str {
        match self {
            VolumeBucket::Under100 => "< 100",
            VolumeBucket::From100To300 => "100 - 300",
            VolumeBucket::From300To600 => "300 - 600",
            VolumeBucket::Over600 => "> 600",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }

    /// Integer persisted for this bracket.
    pub fn representative(self) -> u32 {
        match self {
            VolumeBucket::Under100 => 50,
            VolumeBucket::From100To300 => 200,
            VolumeBucket::From300To600 => 450,
            VolumeBucket::Over600 => 800,
        }
    }

    /// Mapping used at the form boundary: any unmapped or empty label
    /// persists as 0.
    pub fn representative_for(label: &str) -> u32 {
        Self::from_label(label)
            .map(Self::representative)
            .unwrap_or(0)
    }
}

/// Row inserted into `leads_contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLead {
    pub clinic_name: String,
    pub owner_name: String,
    pub email: String,
    pub whatsapp: String,
    pub location: String,
    pub monthly_patient_volume: u32,
    pub message: String,
}

/// Row inserted into `leads_roi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiLead {
    pub clinic_name: String,
    pub owner_name: String,
    pub email: String,
    pub whatsapp: String,
    pub monthly_patients: f64,
    pub avg_treatment_value: f64,
    pub no_show_rate: f64,
    pub repeat_visit: f64,
    pub projected_revenue: f64,
    pub roi_multiplier: f64,
}

impl RoiLead {
    /// Assemble the row from the contact fields plus the inputs/projection
    /// pair the calculator last revealed.
    pub fn new(
        clinic_name: String,
        owner_name: String,
        email: String,
        whatsapp: String,
        inputs: &RoiInputs,
        projection: &RoiProjection,
    ) -> Self {
        Self {
            clinic_name,
            owner_name,
            email,
            whatsapp,
            monthly_patients: inputs.monthly_visits,
            avg_treatment_value: inputs.avg_treatment_value,
            no_show_rate: inputs.no_show_rate_pct,
            repeat_visit: inputs.avg_repeat_visits,
            projected_revenue: projection.monthly_increase,
            roi_multiplier: projection.roi_multiplier,
        }
    }
}
