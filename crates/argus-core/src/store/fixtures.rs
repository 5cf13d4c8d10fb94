// ── Seed fixtures ──
//
// Static demo data the store is seeded from. Timestamps are relative to
// process start so the board opens with a plausible recent history.

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    Alarm, AlarmId, AlarmStatus, AlarmType, CallLog, CallRecord, CallStatus, CallType,
    ConnectionStatus, Coordinates, CrewMember, Department, Facility, FacilityTypeDef, LogAction,
    SecurityDepartment, SecurityLog, ServiceVehicle, ShiftStatus, Unit, UnitAction,
    UnitActionKind, UnitStatus,
};

/// Counter the id allocator starts from; fixture alarm ids stop at 127.
pub const NEXT_ALARM_COUNTER: u64 = 128;

/// Fixture year used in seeded alarm ids.
pub const FIXTURE_YEAR: i32 = 2025;

fn mins_ago(mins: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(mins)
}

fn secs_ago(secs: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(secs)
}

pub fn departments() -> Vec<SecurityDepartment> {
    vec![
        SecurityDepartment {
            id: "Kentron".into(),
            name: "Kentron".into(),
            address: "104 Nalbandyan St, Yerevan".into(),
            contact_person: "Armen Avagyan".into(),
            contact_phone: "010-55-55-55".into(),
            coordinates: Coordinates { x: 50.0, y: 50.0 },
            is_archived: false,
        },
        SecurityDepartment {
            id: "Arabkir".into(),
            name: "Arabkir".into(),
            address: "1 Mamikonyants St, Yerevan".into(),
            contact_person: "Vahan Sargsyan".into(),
            contact_phone: "010-22-22-22".into(),
            coordinates: Coordinates { x: 30.0, y: 30.0 },
            is_archived: false,
        },
        SecurityDepartment {
            id: "Nor Nork".into(),
            name: "Nor Nork".into(),
            address: "2 Gai Ave, Yerevan".into(),
            contact_person: "Hayk Petrosyan".into(),
            contact_phone: "010-66-66-66".into(),
            coordinates: Coordinates { x: 70.0, y: 40.0 },
            is_archived: false,
        },
        SecurityDepartment {
            id: "Erebuni".into(),
            name: "Erebuni".into(),
            address: "1 Khaghagh Don St, Yerevan".into(),
            contact_person: "Gevorg Karapetyan".into(),
            contact_phone: "010-44-44-44".into(),
            coordinates: Coordinates { x: 60.0, y: 70.0 },
            is_archived: true,
        },
    ]
}

pub fn facility_types() -> Vec<FacilityTypeDef> {
    [
        ("1", "Bank", "BANK"),
        ("2", "School", "SCHOOL"),
        ("3", "Shop", "SHOP"),
        ("4", "Museum", "MUSEUM"),
        ("5", "Office", "OFFICE"),
        ("6", "Residence", "RESIDENCE"),
        ("7", "Restaurant", "RESTAURANT"),
        ("8", "Pharmacy", "PHARMACY"),
        ("9", "House", "HOUSE"),
    ]
    .into_iter()
    .map(|(id, name, code)| FacilityTypeDef {
        id: id.into(),
        name: name.into(),
        code: code.into(),
    })
    .collect()
}

pub fn facilities() -> Vec<Facility> {
    vec![
        Facility {
            id: "OBJ-112".into(),
            name: "Gold Market".into(),
            facility_type: "SHOP".into(),
            department: Department::from("Kentron"),
            address: "24 Khorenatsi St, Yerevan".into(),
            coordinates: Coordinates { x: 42.0, y: 45.0 },
            contact_person: "Karen Karapetyan".into(),
            phones: vec!["094-00-11-22".into()],
            is_armed: true,
            connection_status: ConnectionStatus::Online,
            active_alarm_id: Some(AlarmId::new(FIXTURE_YEAR, 127)),
            schedule: "24/7".into(),
            password: Some("123".into()),
            is_archived: false,
        },
        Facility {
            id: "OBJ-055".into(),
            name: "School No. 114".into(),
            facility_type: "SCHOOL".into(),
            department: Department::from("Kentron"),
            address: "7 Hanrapetutyan St, Yerevan".into(),
            coordinates: Coordinates { x: 52.0, y: 38.0 },
            contact_person: "Narine Petrosyan".into(),
            phones: vec!["099-88-77-66".into()],
            is_armed: true,
            connection_status: ConnectionStatus::Online,
            active_alarm_id: Some(AlarmId::new(FIXTURE_YEAR, 124)),
            schedule: "Mon-Fri, 18:00 - 08:00".into(),
            password: Some("456".into()),
            is_archived: false,
        },
        Facility {
            id: "OBJ-001".into(),
            name: "Ameriabank CJSC".into(),
            facility_type: "BANK".into(),
            department: Department::from("Kentron"),
            address: "15 Tumanyan St, Yerevan".into(),
            coordinates: Coordinates { x: 48.0, y: 32.0 },
            contact_person: "Armen Sargsyan".into(),
            phones: vec!["091-11-22-33".into()],
            is_armed: true,
            connection_status: ConnectionStatus::Online,
            active_alarm_id: None,
            schedule: "24/7".into(),
            password: Some("789".into()),
            is_archived: false,
        },
        Facility {
            id: "OBJ-099".into(),
            name: "Yerevan City Supermarket".into(),
            facility_type: "SHOP".into(),
            department: Department::from("Arabkir"),
            address: "22 Komitas Ave, Yerevan".into(),
            coordinates: Coordinates { x: 25.0, y: 25.0 },
            contact_person: "Gevorg Gevorgyan".into(),
            phones: vec!["093-33-22-11".into()],
            is_armed: false,
            connection_status: ConnectionStatus::Offline,
            active_alarm_id: Some(AlarmId::new(FIXTURE_YEAR, 125)),
            schedule: "24/7".into(),
            password: Some("000".into()),
            is_archived: false,
        },
        Facility {
            id: "OBJ-200".into(),
            name: "City Museum".into(),
            facility_type: "MUSEUM".into(),
            department: Department::from("Erebuni"),
            address: "1 Erebuni St, Yerevan".into(),
            coordinates: Coordinates { x: 65.0, y: 65.0 },
            contact_person: "Hayk Haykyan".into(),
            phones: vec!["010-11-11-11".into()],
            is_armed: true,
            connection_status: ConnectionStatus::Online,
            active_alarm_id: None,
            schedule: "24/7".into(),
            password: Some("111".into()),
            is_archived: false,
        },
    ]
}

fn crew() -> Vec<CrewMember> {
    vec![
        CrewMember {
            name: "Armen Petrosyan".into(),
            role: "Commander".into(),
            badge: "P-001".into(),
            phone: "091-11-11-11".into(),
            is_online: true,
            last_login: mins_ago(240),
        },
        CrewMember {
            name: "Karen Sargsyan".into(),
            role: "Driver".into(),
            badge: "P-002".into(),
            phone: "091-22-22-22".into(),
            is_online: true,
            last_login: mins_ago(235),
        },
    ]
}

pub fn units() -> Vec<Unit> {
    vec![
        Unit {
            id: "U-101".into(),
            name: "Unit 101".into(),
            board_number: "Y0101".into(),
            plate_number: "555 OO 01".into(),
            status: UnitStatus::Available,
            shift_status: ShiftStatus::OnDuty,
            status_start_time: mins_ago(60),
            shift_start_time: mins_ago(240),
            shift_end_time: Some(Utc::now() + Duration::hours(8)),
            department: Department::from("Kentron"),
            coordinates: Coordinates { x: 45.0, y: 35.0 },
            crew: crew(),
            is_wifi_lost: false,
            is_gps_lost: false,
            active_alarm_id: None,
            vehicle_id: Some("V-001".into()),
        },
        Unit {
            id: "U-102".into(),
            name: "Unit 102".into(),
            board_number: "Y0102".into(),
            plate_number: "555 OO 02".into(),
            status: UnitStatus::Busy,
            shift_status: ShiftStatus::Break,
            status_start_time: mins_ago(30),
            shift_start_time: mins_ago(300),
            shift_end_time: Some(Utc::now() + Duration::hours(7)),
            department: Department::from("Arabkir"),
            coordinates: Coordinates { x: 20.0, y: 20.0 },
            crew: crew(),
            is_wifi_lost: true,
            is_gps_lost: false,
            active_alarm_id: None,
            vehicle_id: Some("V-002".into()),
        },
        Unit {
            id: "U-103".into(),
            name: "Unit 103".into(),
            board_number: "Y0103".into(),
            plate_number: "555 OO 03".into(),
            status: UnitStatus::Available,
            shift_status: ShiftStatus::OffDuty,
            status_start_time: mins_ago(120),
            shift_start_time: mins_ago(720),
            shift_end_time: Some(mins_ago(120)),
            department: Department::from("Nor Nork"),
            coordinates: Coordinates { x: 75.0, y: 30.0 },
            crew: crew(),
            is_wifi_lost: false,
            is_gps_lost: true,
            active_alarm_id: None,
            vehicle_id: Some("V-003".into()),
        },
        Unit {
            id: "U-104".into(),
            name: "Unit 104".into(),
            board_number: "Y0104".into(),
            plate_number: "555 OO 04".into(),
            status: UnitStatus::Busy,
            shift_status: ShiftStatus::Alarm,
            status_start_time: mins_ago(15),
            shift_start_time: mins_ago(180),
            shift_end_time: Some(Utc::now() + Duration::hours(9)),
            department: Department::from("Kentron"),
            coordinates: Coordinates { x: 50.0, y: 40.0 },
            crew: crew(),
            is_wifi_lost: false,
            is_gps_lost: false,
            active_alarm_id: Some(AlarmId::new(FIXTURE_YEAR, 124)),
            vehicle_id: Some("V-004".into()),
        },
    ]
}

pub fn vehicles() -> Vec<ServiceVehicle> {
    vec![
        ServiceVehicle {
            id: "V-001".into(),
            name: "Y0101".into(),
            plate_number: "555 OO 01".into(),
            brand: "Toyota Corolla".into(),
            department: Department::from("Kentron"),
            is_archived: false,
            gps_imei: Some("354896091234567".into()),
        },
        ServiceVehicle {
            id: "V-002".into(),
            name: "Y0102".into(),
            plate_number: "555 OO 02".into(),
            brand: "Skoda Octavia".into(),
            department: Department::from("Arabkir"),
            is_archived: false,
            gps_imei: Some("354896097654321".into()),
        },
        ServiceVehicle {
            id: "V-003".into(),
            name: "Y0103".into(),
            plate_number: "555 OO 03".into(),
            brand: "Toyota Corolla".into(),
            department: Department::from("Nor Nork"),
            is_archived: false,
            gps_imei: None,
        },
        ServiceVehicle {
            id: "V-004".into(),
            name: "Y0104".into(),
            plate_number: "555 OO 04".into(),
            brand: "Kia Forte".into(),
            department: Department::from("Kentron"),
            is_archived: false,
            gps_imei: Some("354896091122334".into()),
        },
        ServiceVehicle {
            id: "V-005".into(),
            name: "Y0105".into(),
            plate_number: "999 AA 99".into(),
            brand: "Lada Priora".into(),
            department: Department::from("Erebuni"),
            is_archived: true,
            gps_imei: None,
        },
    ]
}

#[allow(clippy::too_many_lines)]
pub fn alarms() -> Vec<Alarm> {
    let id = |counter: u64| AlarmId::new(FIXTURE_YEAR, counter);

    let received_silent = Alarm {
        id: id(127),
        is_seen: false,
        status: AlarmStatus::Received,
        timestamp: mins_ago(2),
        alarm_type: AlarmType::Silent,
        facility_code: "OBJ-112".into(),
        facility_name: "Gold Market".into(),
        facility_type: "SHOP".into(),
        address: "24 Khorenatsi St, Yerevan".into(),
        department: Department::from("Kentron"),
        contact_person: "Karen Karapetyan".into(),
        contact_phones: vec![
            "094-00-11-22".into(),
            "091-55-44-33".into(),
            "010-22-33-44".into(),
        ],
        coordinates: Coordinates { x: 42.0, y: 45.0 },
        facility_password: Some("123".into()),
        description: "Motion sensor in the safe room.".into(),
        assigned_unit_id: None,
        unit_actions: Vec::new(),
        call_history: Vec::new(),
        unit_finished_work: false,
    };

    let mut power_loss = received_silent.clone();
    power_loss.id = id(126);
    power_loss.timestamp = mins_ago(10);
    power_loss.alarm_type = AlarmType::PowerLoss;
    power_loss.facility_code = "OBJ-001".into();
    power_loss.facility_name = "Ameriabank CJSC".into();
    power_loss.facility_type = "BANK".into();
    power_loss.address = "15 Tumanyan St, Yerevan".into();
    power_loss.contact_person = "Armen Sargsyan".into();
    power_loss.contact_phones = vec!["091-11-22-33".into()];
    power_loss.coordinates = Coordinates { x: 48.0, y: 32.0 };
    power_loss.facility_password = Some("789".into());
    power_loss.description = "Mains power lost (220V)".into();

    let connection_lost = Alarm {
        id: id(125),
        is_seen: true,
        status: AlarmStatus::Active,
        timestamp: mins_ago(30),
        alarm_type: AlarmType::ConnectionLost,
        facility_code: "OBJ-099".into(),
        facility_name: "Yerevan City Supermarket".into(),
        facility_type: "SHOP".into(),
        address: "22 Komitas Ave, Yerevan".into(),
        department: Department::from("Arabkir"),
        contact_person: "Gevorg Gevorgyan".into(),
        contact_phones: vec!["093-33-22-11".into()],
        coordinates: Coordinates { x: 25.0, y: 25.0 },
        facility_password: Some("000".into()),
        description: "Link to the central panel lost".into(),
        assigned_unit_id: Some("U-102".into()),
        unit_actions: vec![
            UnitAction {
                unit_name: "Unit 102".into(),
                action: "received the call".into(),
                kind: UnitActionKind::Receive,
                timestamp: mins_ago(29),
            },
            UnitAction {
                unit_name: "Unit 102".into(),
                action: "accepted the call".into(),
                kind: UnitActionKind::Accept,
                timestamp: mins_ago(25),
            },
        ],
        call_history: Vec::new(),
        unit_finished_work: false,
    };

    let school_silent = Alarm {
        id: id(124),
        is_seen: true,
        status: AlarmStatus::Active,
        timestamp: mins_ago(45),
        alarm_type: AlarmType::Silent,
        facility_code: "OBJ-055".into(),
        facility_name: "School No. 114".into(),
        facility_type: "SCHOOL".into(),
        address: "7 Hanrapetutyan St, Yerevan".into(),
        department: Department::from("Kentron"),
        contact_person: "Narine Petrosyan".into(),
        contact_phones: vec!["099-88-77-66".into(), "093-11-22-33".into()],
        coordinates: Coordinates { x: 52.0, y: 38.0 },
        facility_password: Some("456".into()),
        description: "Motion sensor tripped in the corridor.".into(),
        assigned_unit_id: Some("U-104".into()),
        unit_actions: vec![
            UnitAction {
                unit_name: "Unit 102".into(),
                action: "received the call".into(),
                kind: UnitActionKind::Receive,
                timestamp: mins_ago(44),
            },
            UnitAction {
                unit_name: "Unit 102".into(),
                action: "rejected the call (busy)".into(),
                kind: UnitActionKind::Reject,
                timestamp: mins_ago(43),
            },
            UnitAction {
                unit_name: "Unit 104".into(),
                action: "received the call".into(),
                kind: UnitActionKind::Receive,
                timestamp: mins_ago(44),
            },
            UnitAction {
                unit_name: "Unit 104".into(),
                action: "accepted the call".into(),
                kind: UnitActionKind::Accept,
                timestamp: mins_ago(40),
            },
            UnitAction {
                unit_name: "Unit 104".into(),
                action: "arrived on site".into(),
                kind: UnitActionKind::Arrive,
                timestamp: mins_ago(25),
            },
            UnitAction {
                unit_name: "Unit 104".into(),
                action: "finished the call".into(),
                kind: UnitActionKind::Finish,
                timestamp: mins_ago(5),
            },
        ],
        call_history: vec![CallRecord {
            id: "C-1".into(),
            operator_name: "Operator 1".into(),
            timestamp: mins_ago(42),
            phone_number: "099-88-77-66".into(),
            duration_secs: 45,
            recording_url: "#".into(),
        }],
        unit_finished_work: true,
    };

    let mut bank_panic = power_loss.clone();
    bank_panic.id = id(123);
    bank_panic.timestamp = mins_ago(65);
    bank_panic.alarm_type = AlarmType::General;
    bank_panic.contact_phones = vec!["091-11-22-33".into(), "010-55-44-33".into()];
    bank_panic.description = "Panic button. Cash desk 2.".into();

    let mut finished = connection_lost.clone();
    finished.id = id(120);
    finished.timestamp = mins_ago(120);
    finished.alarm_type = AlarmType::General;
    finished.status = AlarmStatus::Finished;
    finished.description = "Security system fault.".into();
    finished.assigned_unit_id = None;
    finished.unit_actions = Vec::new();
    finished.unit_finished_work = true;

    vec![
        received_silent,
        power_loss,
        connection_lost,
        school_silent,
        bank_panic,
        finished,
    ]
}

pub fn security_logs() -> Vec<SecurityLog> {
    let row = |id: &str,
               mins: i64,
               dept: &str,
               name: &str,
               code: &str,
               address: &str,
               action: LogAction| SecurityLog {
        id: id.into(),
        timestamp: mins_ago(mins),
        department: Department::from(dept),
        facility_name: name.into(),
        facility_code: code.into(),
        address: address.into(),
        action,
    };

    vec![
        row("L-1", 5, "Kentron", "Gold Market", "OBJ-112", "24 Khorenatsi St, Yerevan", LogAction::AlarmSilent),
        row("L-2", 20, "Kentron", "School No. 114", "OBJ-055", "7 Hanrapetutyan St, Yerevan", LogAction::Arm),
        row("L-3", 45, "Kentron", "Ameriabank CJSC", "OBJ-001", "15 Tumanyan St, Yerevan", LogAction::AlarmGeneral),
        row("L-4", 120, "Arabkir", "Yerevan City Supermarket", "OBJ-099", "22 Komitas Ave, Yerevan", LogAction::Disarm),
        row("L-5", 180, "Erebuni", "City Museum", "OBJ-200", "1 Erebuni St, Yerevan", LogAction::Arm),
        row("L-6", 200, "Arabkir", "Apartment 22", "OBJ-301", "10 Komitas Ave, Yerevan", LogAction::Arm),
        row("L-7", 300, "Nor Nork", "Rainbow Store", "OBJ-404", "10 Gai Ave, Yerevan", LogAction::Disarm),
        row("L-8", 360, "Kentron", "Ameriabank CJSC", "OBJ-001", "15 Tumanyan St, Yerevan", LogAction::PowerLoss),
        row("L-9", 400, "Arabkir", "Yerevan City Supermarket", "OBJ-099", "22 Komitas Ave, Yerevan", LogAction::ConnectionLost),
        row("L-10", 420, "Erebuni", "City Museum", "OBJ-200", "1 Erebuni St, Yerevan", LogAction::LowBattery),
    ]
}

#[allow(clippy::too_many_lines)]
pub fn call_logs() -> Vec<CallLog> {
    vec![
        CallLog {
            id: "CL-125".into(),
            timestamp: secs_ago(20),
            duration_secs: 0,
            call_type: CallType::IncomingAnswered,
            status: CallStatus::InProgress,
            facility_code: None,
            facility_name: None,
            phone_number: "095-99-88-77".into(),
            department: None,
            operator_name: "Armen Avagyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-124".into(),
            timestamp: secs_ago(45),
            duration_secs: 0,
            call_type: CallType::IncomingAnswered,
            status: CallStatus::InProgress,
            facility_code: Some("OBJ-200".into()),
            facility_name: Some("City Museum".into()),
            phone_number: "010-11-11-11".into(),
            department: Some(Department::from("Erebuni")),
            operator_name: "Armen Avagyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-123".into(),
            timestamp: mins_ago(5),
            duration_secs: 125,
            call_type: CallType::IncomingAnswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-112".into()),
            facility_name: Some("Gold Market".into()),
            phone_number: "094-00-11-22".into(),
            department: Some(Department::from("Kentron")),
            operator_name: "Armen Avagyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-122".into(),
            timestamp: mins_ago(15),
            duration_secs: 45,
            call_type: CallType::OutgoingAnswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-001".into()),
            facility_name: Some("Ameriabank CJSC".into()),
            phone_number: "091-11-22-33".into(),
            department: Some(Department::from("Kentron")),
            operator_name: "Operator 4".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-121".into(),
            timestamp: mins_ago(45),
            duration_secs: 0,
            call_type: CallType::IncomingUnanswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-055".into()),
            facility_name: Some("School No. 114".into()),
            phone_number: "099-88-77-66".into(),
            department: Some(Department::from("Kentron")),
            operator_name: "Anna Sargsyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-120".into(),
            timestamp: mins_ago(120),
            duration_secs: 180,
            call_type: CallType::OutgoingAnswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-099".into()),
            facility_name: Some("Yerevan City Supermarket".into()),
            phone_number: "093-33-22-11".into(),
            department: Some(Department::from("Arabkir")),
            operator_name: "Vahan Sargsyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-119".into(),
            timestamp: mins_ago(180),
            duration_secs: 12,
            call_type: CallType::OutgoingUnanswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-200".into()),
            facility_name: Some("City Museum".into()),
            phone_number: "010-11-11-11".into(),
            department: Some(Department::from("Erebuni")),
            operator_name: "Gevorg Karapetyan".into(),
            recording_url: "#".into(),
        },
        CallLog {
            id: "CL-118".into(),
            timestamp: mins_ago(240),
            duration_secs: 320,
            call_type: CallType::IncomingAnswered,
            status: CallStatus::Completed,
            facility_code: Some("OBJ-112".into()),
            facility_name: Some("Gold Market".into()),
            phone_number: "094-00-11-22".into(),
            department: Some(Department::from("Kentron")),
            operator_name: "Armen Avagyan".into(),
            recording_url: "#".into(),
        },
    ]
}
