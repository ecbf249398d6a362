#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: &'static str,
    pub active_journeys: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunnelStage {
    pub label: &'static str,
    pub count: u32,
}
