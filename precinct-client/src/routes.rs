//! Application routes

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const UNAUTHORIZED: &str = "/unauthorized";
pub const DASHBOARD: &str = "/dashboard";
pub const CASES: &str = "/cases";
pub const CASE_CREATE: &str = "/cases/create";
pub const COMPLAINTS: &str = "/complaints";
pub const COMPLAINT_SUBMIT: &str = "/complaints/submit";
pub const EVIDENCE: &str = "/evidence";
pub const EVIDENCE_CREATE: &str = "/evidence/create";
pub const DETECTIVE_BOARD: &str = "/detective-board";
pub const MOST_WANTED: &str = "/most-wanted";
pub const REPORTS: &str = "/reports";
pub const REWARDS: &str = "/rewards";
pub const REWARD_SUBMIT: &str = "/rewards/submit";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_ROLES: &str = "/admin/roles";

pub fn case_detail(id: impl std::fmt::Display) -> String {
    format!("{CASES}/{id}")
}

pub fn complaint_detail(id: impl std::fmt::Display) -> String {
    format!("{COMPLAINTS}/{id}")
}

pub fn evidence_detail(id: impl std::fmt::Display) -> String {
    format!("{EVIDENCE}/{id}")
}

pub fn detective_board_case(case_id: impl std::fmt::Display) -> String {
    format!("{DETECTIVE_BOARD}/{case_id}")
}
