//! Deterministic render resource naming
//!
//! Every visible vessel owns exactly five named resources. Names are derived
//! from the MMSI so lookup and removal are idempotent, and MMSI uniqueness
//! guarantees no two vessels collide.

/// The five resource kinds derived from one vessel track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselResource {
    Path,
    StartPoint,
    EndPoint,
    Points,
    PointsHighlight,
}

impl VesselResource {
    pub const ALL: [VesselResource; 5] = [
        VesselResource::Path,
        VesselResource::StartPoint,
        VesselResource::EndPoint,
        VesselResource::Points,
        VesselResource::PointsHighlight,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            VesselResource::Path => "vessel-path",
            VesselResource::StartPoint => "start-point",
            VesselResource::EndPoint => "end-point",
            VesselResource::Points => "vessel-points",
            VesselResource::PointsHighlight => "vessel-points-highlight",
        }
    }

    /// Resource name for a given vessel: `"<tag>-<mmsi>"`.
    pub fn name(&self, mmsi: &str) -> String {
        format!("{}-{}", self.tag(), mmsi)
    }
}
