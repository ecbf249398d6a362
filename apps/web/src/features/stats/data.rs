//! Mock feeds for the dashboard widgets.

use crate::features::stats::types::{DepartmentCount, FunnelStage, StatTile};

pub const STAT_TILES: [StatTile; 4] = [
    StatTile {
        label: "Active journeys",
        value: "38",
        hint: "Across all departments",
    },
    StatTile {
        label: "Completed this month",
        value: "12",
        hint: "+4 vs. last month",
    },
    StatTile {
        label: "Overdue steps",
        value: "7",
        hint: "Oldest is 6 days late",
    },
    StatTile {
        label: "Avg. completion",
        value: "24 days",
        hint: "Rolling 90-day window",
    },
];

pub const DEPARTMENT_COUNTS: [DepartmentCount; 5] = [
    DepartmentCount {
        department: "Engineering",
        active_journeys: 14,
    },
    DepartmentCount {
        department: "Sales",
        active_journeys: 9,
    },
    DepartmentCount {
        department: "People Ops",
        active_journeys: 6,
    },
    DepartmentCount {
        department: "Finance",
        active_journeys: 5,
    },
    DepartmentCount {
        department: "Support",
        active_journeys: 4,
    },
];

pub const FUNNEL_STAGES: [FunnelStage; 4] = [
    FunnelStage {
        label: "Invited",
        count: 52,
    },
    FunnelStage {
        label: "Accounts created",
        count: 47,
    },
    FunnelStage {
        label: "Journeys started",
        count: 38,
    },
    FunnelStage {
        label: "Completed",
        count: 26,
    },
];
