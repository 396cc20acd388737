pub const SUITE_LEDGER: u32 = 1 << 0;
pub const SUITE_CATALOG: u32 = 1 << 1;
pub const SUITE_INPUT: u32 = 1 << 2;
pub const SUITE_ANIMATOR: u32 = 1 << 3;
pub const SUITE_CONTROLLER: u32 = 1 << 4;
pub const SUITE_ALL: u32 =
    SUITE_LEDGER | SUITE_CATALOG | SUITE_INPUT | SUITE_ANIMATOR | SUITE_CONTROLLER;
