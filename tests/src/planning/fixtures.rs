/// Fleet of three with a mix of package sizes, in the manifest format.
pub const MIXED_FLEET: &str = "\
DroneA, [200], DroneB, [250], DroneC, [100]
LocationA, [200]
LocationB, [150]
LocationC, [50]
LocationD, [150]
LocationE, [100]
LocationF, [200]
LocationG, [50]
LocationH, [80]
LocationI, [70]
LocationJ, [50]
LocationK, [30]
LocationL, [20]
LocationM, [50]
LocationN, [30]
LocationO, [20]
LocationP, [90]
";

pub const TWO_DRONES: &str = "\
A, [50], B, [30]
x, [10]
y, [20]
z, [25]
";

pub const OVERSIZED: &str = "\
Tiny, [5]
Piano, [999]
";

pub const NO_LOCATIONS: &str = "DroneA, [10], DroneB, [20]\n";
