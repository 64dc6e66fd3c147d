//! Faculty of Science curriculum handbook data
//!
//! Codes are listed as printed in the handbook; [`super::Registry`]
//! normalizes them on load. A code listed twice keeps the later entry.

use crate::core::models::CourseNature::{Combined, Practical, Project, Theory};
use crate::core::models::CourseType::{Core, Optional};
use crate::core::models::{CourseNature, CourseType, Family};

/// One handbook line: code, type, nature
pub type HandbookEntry = (&'static str, CourseType, CourseNature);

/// Classifications shared by both degree families
pub const GLOBAL: &[HandbookEntry] = &[
    // BCS general degree
    // Level 1 – Semester 1
    ("CSC1122", Core, Theory),
    ("CSC1113", Core, Combined),
    ("CSC113α", Core, Combined),
    ("CSC1142", Core, Theory),
    ("CSC1153", Core, Practical),
    ("MAT112δ", Core, Theory),
    ("MAT113δ", Core, Theory),
    // Level 1 – Semester 2
    ("CSC1213", Core, Combined),
    ("CSC1223", Core, Theory),
    ("CSC1233", Core, Theory),
    ("CSC1242", Core, Theory),
    ("CSC1251", Core, Practical),
    ("AMT112β", Core, Theory),
    ("MAT121β", Core, Theory),
    ("MAT122β", Core, Theory),
    // Level 2 – Semester 1
    ("CSC2113", Core, Combined),
    ("CSC2123", Core, Combined),
    ("CSC2133", Core, Theory),
    ("CSC2143", Core, Combined),
    ("AMT212β", Core, Theory),
    ("MAT211β", Core, Theory),
    ("PHY2112", Core, Theory),
    // Level 2 – Semester 2
    ("CSC2213", Core, Combined),
    ("CSC2222", Core, Theory),
    ("CSC2233", Core, Combined),
    ("CSC2242", Core, Theory),
    ("CSC2252", Core, Theory),
    ("MAT225β", Core, Theory),
    // Optionals
    ("CSC2262", Optional, Theory),
    ("CSC2263", Optional, Combined),
    ("CSC2272", Optional, Combined),
    // Level 3 – Semester 1
    ("CSC3113", Core, Practical),
    ("CSC3122", Optional, Theory),
    ("CSC3132", Optional, Theory),
    ("CSC3142", Optional, Theory),
    ("CSC3152", Optional, Combined),
    // Level 3 – Semester 2
    ("CSC3216", Core, Practical),
    ("CSC3222", Optional, Theory),
    ("CSC3232", Optional, Theory),
    ("CSC3242", Optional, Theory),
    ("CSC3252", Optional, Combined),
    ("CSC3172", Optional, Theory),

    // BCS honours degree
    ("CSC4112", Core, Theory),
    ("CSC4122", Core, Theory),
    ("CSC4133", Core, Theory),
    ("CSC4046", Core, Project),
    ("CSC4152", Core, Theory),
    ("CSC4162", Core, Theory),
    ("CSC4172", Core, Theory),
    ("CSC4182", Core, Theory),
    ("CSC4212", Core, Theory),
    ("CSC4222", Core, Theory),
    ("CSC4232", Optional, Theory),
    ("CSC4242", Core, Theory),
    ("CSC4262", Optional, Theory),

    // Botany, BSc general
    // Level 1 – Semester 1
    ("BOT1112", Core, Theory),
    ("BOT1121", Core, Theory),
    ("BOT1131", Core, Theory),
    ("BOT1141", Core, Practical),
    // Level 1 – Semester 2
    ("BOT1212", Core, Theory),
    ("BOT1221", Core, Theory),
    ("BOT1231", Core, Theory),
    ("BOT1241", Core, Practical),
    // Level 2 – Semester 1
    ("BOT2112", Core, Theory),
    ("BOT2121", Core, Theory),
    ("BOT2131", Core, Theory),
    ("BOT2141", Core, Practical),
    // Level 2 – Semester 2
    ("BOT2212", Core, Theory),
    ("BOT2221", Core, Theory),
    ("BOT2231", Core, Theory),
    ("BOT2241", Core, Practical),
    // Level 3 – Semester 1 (all optional)
    ("BOT3112", Optional, Combined),
    ("BOT3122", Optional, Combined),
    ("BOT3132", Optional, Combined),
    ("BOT3142", Optional, Combined),
    ("BOT3151", Optional, Theory),
    ("BOT3162", Optional, Combined),
    ("BOT3172", Optional, Combined),
    ("BOT3182", Optional, Combined),
    ("BOT3191", Optional, Combined),
    // Level 3 – Semester 2 (all optional)
    ("BOT3212", Optional, Combined),
    ("BOT3222", Optional, Combined),
    ("BOT3232", Optional, Combined),
    ("BOT3242", Optional, Combined),
    ("BOT3251", Optional, Theory),
    ("BOT3261", Optional, Theory),
    ("BOT3271", Optional, Theory),
    ("BOT3282", Optional, Combined),
    ("BOT3292", Optional, Combined),

    // Botany, BSc honours
    ("BOT4012", Core, Combined),
    ("BOT4022", Core, Combined),
    ("BOT4032", Core, Combined),
    ("BOT4042", Core, Theory),
    ("BOT4052", Core, Combined),
    ("BOT4062", Core, Combined),
    ("BOT4072", Core, Theory),
    ("BOT4082", Core, Combined),
    ("BOT4092", Core, Combined),
    ("BOT4102", Core, Combined),
    ("BOT4112", Core, Combined),
    ("BOT4122", Core, Theory),
    ("BOT4132", Core, Combined),
    ("BOT4142", Core, Combined),
    ("BOT4152", Core, Combined),
    ("BOT4162", Core, Combined),
    ("BOT4172", Core, Combined),
    ("BOT4182", Core, Practical),
    ("BOT4192", Core, Combined),
    ("BOT4202", Core, Combined),
    ("BOT4212", Core, Combined),
    ("BOT4222", Core, Combined),
    ("BOT4232", Core, Combined),
    ("BOT4242", Core, Combined),
    ("BOT4252", Core, Practical),
    ("BOT4262", Core, Combined),
    ("BOT4276", Core, Project),
    ("BOT4282", Core, Combined),
    ("BOT4292", Core, Practical),

    // Chemistry, BSc general
    // Level 1 – Semester 1
    ("CHE1112", Core, Theory),
    ("CHE1122", Core, Theory),
    ("CHE1032", Core, Practical),
    // Level 1 – Semester 2
    ("CHE1212", Core, Theory),
    ("CHE1222", Core, Theory),
    // Level 2 – Semester 1
    ("CHE2112", Core, Theory),
    ("CHE2122", Core, Theory),
    ("CHE2131", Core, Practical),
    // Level 2 – Semester 2
    ("CHE2212", Core, Theory),
    ("CHE2222", Core, Theory),
    ("CHE2231", Core, Practical),
    // Level 3 – Semester 1 (optional)
    ("CHE3112", Optional, Combined),
    ("CHE3122", Optional, Combined),
    ("CHE3132", Optional, Combined),
    // Level 3 – Semester 2 (optional)
    ("CHE3212", Optional, Combined),
    ("CHE3222", Optional, Combined),
    ("CHE3232", Optional, Theory),

    // Chemistry, BSc honours
    ("CHE4012", Core, Theory),
    ("CHE4022", Core, Theory),
    ("CHE4032", Core, Theory),
    ("CHE4042", Core, Theory),
    ("CHE4052", Core, Theory),
    ("CHE4062", Core, Theory),
    ("CHE4072", Core, Theory),
    ("CHE4082", Core, Theory),
    ("CHE4092", Core, Theory),
    ("CHE4102", Core, Theory),
    ("CHE4112", Core, Theory),
    ("CHE4122", Core, Theory),
    ("CHE4132", Core, Practical),
    ("CHE4142", Core, Practical),
    ("CHE4152", Core, Practical),
    ("CHE4162", Core, Practical),
    ("CHE4172", Core, Combined),
    ("CHE4182", Core, Combined),
    ("CHE4046", Core, Project),

    // Computer science (COM prefix) for BSc physical streams
    // Level 1
    ("COM1111", Core, Theory),
    ("COM112β", Core, Practical),
    ("COM113α", Core, Theory),
    ("COM121β", Core, Theory),
    ("COM122β", Core, Practical),
    // Level 2
    ("COM212β", Core, Practical),
    ("COM213α", Core, Theory),
    ("COM2141", Core, Theory),
    ("COM221β", Core, Practical),
    ("COM222β", Core, Theory),
    // Level 3 – Semester 1
    ("COM311β", Core, Theory),
    ("COM312β", Optional, Combined),
    ("COM3b3β", Core, Practical),
    ("COM3b52", Optional, Combined),
    // Level 3 – Semester 2 (all optional for Physical streams)
    ("COM3252", Optional, Theory),
    ("COM3212", Optional, Theory),
    ("COM323α", Optional, Combined),
    ("COM324α", Optional, Combined),
    ("COM326β", Optional, Combined),

    // Mathematics, BSc general
    // Level 1
    ("MAT111β", Core, Theory),
    // Level 2
    ("MAT212β", Core, Theory),
    ("MAT221β", Core, Theory),
    ("MAT222δ", Core, Theory),
    ("MAT224δ", Core, Theory),
    // Level 3 – Semester 1
    ("MAT311β", Core, Theory),
    ("MAT312β", Core, Theory),
    ("MAT313β", Core, Theory),
    // Level 3 – Semester 2 (all optional)
    ("MAT321β", Optional, Theory),
    ("MAT322β", Optional, Theory),
    ("MAT323β", Optional, Theory),
    ("MAT324β", Optional, Theory),
    ("MAT325β", Optional, Theory),
    ("MAT326β", Optional, Theory),

    // Industrial mathematics
    // Bio-stream mathematics
    ("IMT111β", Core, Theory),
    ("IMT121β", Core, Theory),
    ("IMT122β", Core, Theory),
    ("IMT1b2β", Core, Project),
    ("IMT211β", Core, Theory),
    ("IMT2b2β", Core, Project),
    ("IMT221β", Core, Theory),
    ("IMT223β", Core, Theory),
    ("IMT224β", Core, Theory),
    ("IMT3b1β", Core, Project),
    ("IMT312β", Core, Theory),
    ("IMT313β", Core, Theory),
    // Semester 2 optional
    ("IMT321β", Optional, Theory),
    ("IMT322β", Optional, Theory),
    ("IMT323β", Optional, Theory),
    ("IMT324β", Optional, Theory),

    // Applied mathematics
    ("AMT111β", Core, Theory),
    ("AMT121β", Core, Theory),
    ("AMT122β", Core, Theory),
    ("AMT211β", Core, Theory),
    ("AMT221β", Core, Theory),
    ("AMT223β", Core, Theory),
    ("AMT224β", Core, Theory),
    ("AMT311β", Core, Theory),
    ("AMT312β", Core, Theory),
    ("AMT313β", Core, Theory),
    ("AMT314β", Core, Theory),
    // Semester 2 optional
    ("AMT321β", Optional, Theory),
    ("AMT322β", Optional, Theory),
    ("AMT323β", Optional, Theory),
    ("AMT324β", Optional, Theory),

    // Mathematics, BSc honours
    ("MAT411β", Core, Theory),
    ("MAT412β", Core, Theory),
    ("MAT413β", Core, Theory),
    ("MAT414β", Core, Theory),
    ("MAT415β", Core, Theory),
    ("MAT421β", Core, Theory),
    ("MAT422β", Core, Theory),
    ("MAT423β", Core, Theory),
    ("MAT424β", Core, Theory),
    ("MAT425β", Core, Theory),
    ("MAT4b6β", Core, Project),
    ("AMT411β", Core, Theory),
    ("AMT412β", Core, Theory),
    ("AMT413β", Core, Theory),
    ("AMT421β", Core, Theory),
    ("AMT422β", Core, Theory),
    ("AMT423β", Core, Theory),
    ("AMT4b6β", Core, Project),

    // Physics, BSc general
    // Level 1
    ("PHY1114", Core, Theory),
    ("PHY1b22", Core, Practical),
    ("PHY1214", Core, Theory),
    // Level 2
    ("PHY2114", Core, Theory),
    ("PHY2b22", Core, Practical),
    ("PHY2214", Core, Theory),
    ("PHY2222", Optional, Practical),
    // Level 3 – Semester 1 (core for Physics streams)
    ("PHY3114", Core, Theory),
    ("PHY3121", Core, Practical),
    // Level 3 – Semester 2 (all optional)
    ("PHY3232", Optional, Theory),
    ("PHY3242", Optional, Combined),
    ("PHY3252", Optional, Theory),
    ("PHY3262", Optional, Theory),
    ("PHY3272", Optional, Combined),
    ("PHY3282", Optional, Combined),

    // Physics, BSc honours
    ("PHY4112", Core, Theory),
    ("PHY4122", Core, Theory),
    ("PHY4132", Core, Theory),
    ("PHY4142", Core, Theory),
    ("PHY4152", Core, Theory),
    ("PHY4162", Core, Practical),
    ("PHY4172", Core, Theory),
    ("PHY4182", Core, Theory),
    ("PHY4192", Core, Theory),
    ("PHY4202", Core, Combined),
    ("PHY4212", Core, Theory),
    ("PHY4222", Core, Theory),
    ("PHY4232", Core, Practical),
    ("PHY4046", Core, Project),

    // Zoology, BSc general
    // Level 1 – Semester 1
    ("ZOO1102", Core, Theory),
    ("ZOO1112", Core, Theory),
    ("ZOO1121", Core, Practical),
    // Level 1 – Semester 2
    ("ZOO1202", Core, Theory),
    ("ZOO1212", Core, Theory),
    ("ZOO1221", Core, Practical),
    // Level 2 – Semester 1
    ("ZOO2102", Core, Theory),
    ("ZOO2112", Core, Theory),
    ("ZOO2121", Core, Practical),
    // Level 2 – Semester 2
    ("ZOO2202", Core, Theory),
    ("ZOO2212", Core, Theory),
    ("ZOO2221", Core, Practical),
    // Level 2 optional
    ("ZOO2232", Optional, Combined),
    ("ZOO2142", Optional, Combined),
    ("ZOO2152", Optional, Combined),
    ("ZOO2262", Optional, Combined),
    // Level 3 – Semester 1 (optional)
    ("ZOO3112", Optional, Combined),
    ("ZOO3122", Optional, Combined),
    ("ZOO3133", Optional, Combined),
    ("ZOO3152", Optional, Combined),
    ("ZOO3162", Optional, Combined),
    ("ZOO3172", Optional, Combined),
    ("ZOO3182", Optional, Combined),
    ("ZOO3192", Optional, Combined),
    // Level 3 – Semester 2 (optional)
    ("ZOO3202", Optional, Combined),
    ("ZOO3211", Optional, Theory),
    ("ZOO3223", Optional, Combined),
    ("ZOO3232", Optional, Combined),
    ("ZOO3252", Optional, Combined),
    ("ZOO3272", Optional, Combined),
    ("ZOO3292", Optional, Combined),

    // Zoology, BSc honours
    ("ZOO4012", Core, Combined),
    ("ZOO4022", Core, Combined),
    ("ZOO4032", Core, Combined),
    ("ZOO4042", Core, Combined),
    ("ZOO4052", Core, Combined),
    ("ZOO4062", Core, Combined),
    ("ZOO4072", Core, Combined),
    ("ZOO4082", Core, Combined),
    ("ZOO4092", Core, Combined),
    ("ZOO4102", Core, Combined),
    ("ZOO4112", Core, Practical),
    ("ZOO4122", Core, Practical),
    ("ZOO4132", Core, Combined),
    ("ZOO4046", Core, Project),

    // ICT, common across streams
    ("ICT1b13", Core, Combined),
    ("ICT2b13", Optional, Combined),

    // Interdisciplinary (FSC)
    ("FSC115α", Optional, Practical),
    ("FSC215α", Optional, Practical),
    ("FSC224α", Optional, Combined),
    ("FSC225α", Optional, Combined),
    ("FSC3112", Optional, Theory),
    ("FSC3122", Optional, Theory),
    ("FSC3132", Optional, Combined),
    ("FSC3bP2", Optional, Practical),
    ("FSC3212", Optional, Theory),
    ("FSC3222", Optional, Combined),
    ("FSC3232", Optional, Theory),

    // English (DELT)
    ("ENG1b10", Core, Theory),
    ("ENG2b10", Core, Theory),
    ("ENG3b10", Core, Theory),
];

/// Family-specific entries, consulted before [`GLOBAL`]
pub const OVERRIDES: &[(Family, &str, CourseType, CourseNature)] = &[
    // Optional lab-backed unit for BCS, core theory for the mathematics stream
    (Family::Bcs, "MAT313β", Optional, Combined),
    // Mathematics for Biology, offered to biology streams only
    (Family::Bsc, "MAT1142", Core, Theory),
];
