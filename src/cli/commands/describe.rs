//! Describe command: explains the station and train code systems

use colored::Colorize;

/// Print an explanation of the code systems the other commands use
pub fn run_describe() {
    println!();
    println!("{}", "Station identification".bold().cyan());
    println!("{}", "-".repeat(60));
    println!(
        "CRS (3-alpha) codes identify stations for passenger-facing\n\
         systems, e.g. ZFD for Farringdon. A station keeps one principal\n\
         CRS code even when it has several platforms groups; lookups here\n\
         match both the principal and subsidiary codes."
    );
    println!();
    println!(
        "TIPLOC (timing point location) codes identify the locations used\n\
         in the working timetable, at most 7 characters, e.g. FRNDNLT.\n\
         A large station can carry several TIPLOCs; each appears as its\n\
         own record, all sharing the principal CRS code (e.g. Tamworth\n\
         high level and low level)."
    );
    println!();
    println!(
        "Interchange status ranks a station's importance as a transfer\n\
         point: 0 none, 1 small, 2 medium, 3 large. Code 9 marks a\n\
         subsidiary TIPLOC of a multi-TIPLOC station."
    );
    println!();
    println!(
        "Grid coordinates are Ordnance Survey eastings and northings in\n\
         units of 100 m. Stations off the mapped range (Channel Islands,\n\
         Orkneys) carry 0,0; an estimate flag marks approximate positions."
    );

    println!();
    println!("{}", "Train identification".bold().cyan());
    println!("{}", "-".repeat(60));
    println!(
        "A train UID (e.g. W64533) identifies a scheduled service in the\n\
         timetable; together with a running date it names one physical\n\
         train. The timetable command takes a train UID and a date."
    );
    println!();
    println!(
        "Headcodes (e.g. 2C04) identify trains operationally but repeat\n\
         across the network and across days, so they are not used here."
    );

    println!();
    println!("{}", "Data sources".bold().cyan());
    println!("{}", "-".repeat(60));
    println!(
        "Station records come from the Master Station Names (MSN) file in\n\
         the national timetable data download, parsed by the parse\n\
         command. Live departures and timetables come from\n\
         transportapi.com; London line status and disruption data come\n\
         from the TfL unified API."
    );
    println!();
}
