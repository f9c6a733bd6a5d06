use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(super) struct Entry {
    pub en: &'static str,
    pub te: &'static str,
}

// (key, en, te)
const ENTRIES: &[(&str, &str, &str)] = &[
    ("app.title", "SchoolHub", "స్కూల్‌హబ్"),
    ("app.tagline", "One platform for every school", "ప్రతి పాఠశాలకు ఒకే వేదిక"),
    // navigation
    ("nav.dashboard", "Dashboard", "డ్యాష్‌బోర్డ్"),
    ("nav.attendance", "Attendance", "హాజరు"),
    ("nav.grades", "Grades", "గ్రేడ్‌లు"),
    ("nav.teachers", "Teachers", "ఉపాధ్యాయులు"),
    ("nav.classes", "Classes", "తరగతులు"),
    ("nav.tickets", "Support Tickets", "సహాయ టికెట్లు"),
    ("nav.events", "Events", "కార్యక్రమాలు"),
    ("nav.fleet", "Fleet", "వాహనాలు"),
    ("nav.students", "Students", "విద్యార్థులు"),
    ("nav.timetable", "Timetable", "టైమ్‌టేబుల్"),
    ("nav.homework", "Homework", "హోంవర్క్"),
    ("nav.schools", "Schools", "పాఠశాలలు"),
    ("nav.manage_onboardings", "Manage Onboardings", "ఆన్‌బోర్డింగ్ నిర్వహణ"),
    ("nav.analytics", "Analytics", "విశ్లేషణలు"),
    ("nav.onboard_teacher", "Onboard Teacher", "ఉపాధ్యాయుని చేర్చండి"),
    ("nav.onboard_student", "Onboard Student", "విద్యార్థిని చేర్చండి"),
    ("nav.onboard_class", "Add Class", "తరగతిని చేర్చండి"),
    ("nav.onboard_fleet_manager", "Onboard Fleet Manager", "ఫ్లీట్ మేనేజర్‌ను చేర్చండి"),
    ("nav.onboard_driver", "Onboard Driver", "డ్రైవర్‌ను చేర్చండి"),
    // roles
    ("role.super_admin", "Super Admin", "సూపర్ అడ్మిన్"),
    ("role.principal", "Principal", "ప్రధానోపాధ్యాయులు"),
    ("role.vice_principal", "Vice Principal", "ఉప ప్రధానోపాధ్యాయులు"),
    ("role.class_teacher", "Class Teacher", "తరగతి ఉపాధ్యాయులు"),
    ("role.subject_teacher", "Subject Teacher", "సబ్జెక్ట్ ఉపాధ్యాయులు"),
    ("role.fleet_manager", "Fleet Manager", "ఫ్లీట్ మేనేజర్"),
    ("role.parent", "Parent", "తల్లిదండ్రులు"),
    ("role.driver", "Driver", "డ్రైవర్"),
    // login
    ("login.title", "Sign in", "లాగిన్"),
    ("login.select_school", "Select your school", "మీ పాఠశాలను ఎంచుకోండి"),
    ("login.phone", "Phone number", "ఫోన్ నంబర్"),
    ("login.phone_placeholder", "+91 98765 43210", "+91 98765 43210"),
    ("login.send_otp", "Send OTP", "OTP పంపండి"),
    ("login.otp", "One-time password", "వన్-టైమ్ పాస్‌వర్డ్"),
    ("login.otp_hint", "Enter any 6 digits", "ఏవైనా 6 అంకెలు నమోదు చేయండి"),
    ("login.verify", "Verify & sign in", "ధృవీకరించి లాగిన్ అవ్వండి"),
    ("login.change_phone", "Change phone number", "ఫోన్ నంబర్ మార్చండి"),
    ("login.error.invalid", "Invalid phone number or OTP", "ఫోన్ నంబర్ లేదా OTP తప్పు"),
    ("login.error.school_required", "Please select a school", "దయచేసి పాఠశాలను ఎంచుకోండి"),
    ("login.test_credentials", "Test credentials", "పరీక్ష వివరాలు"),
    // common
    ("common.back", "Back", "వెనుకకు"),
    ("common.save", "Save", "సేవ్ చేయండి"),
    ("common.cancel", "Cancel", "రద్దు చేయండి"),
    ("common.add", "Add", "చేర్చండి"),
    ("common.edit", "Edit", "సవరించండి"),
    ("common.delete", "Delete", "తొలగించండి"),
    ("common.search", "Search", "వెతకండి"),
    ("common.logout", "Logout", "లాగౌట్"),
    ("common.language", "Language", "భాష"),
    ("common.notifications", "Notifications", "ప్రకటనలు"),
    ("common.no_data", "Nothing to show yet", "చూపడానికి ఏమీ లేదు"),
    ("common.actions", "Actions", "చర్యలు"),
    ("common.status", "Status", "స్థితి"),
    ("common.name", "Name", "పేరు"),
    ("common.phone", "Phone", "ఫోన్"),
    ("common.email", "Email", "ఈమెయిల్"),
    ("common.address", "Address", "చిరునామా"),
    ("common.date", "Date", "తేదీ"),
    ("common.submit", "Submit", "సమర్పించండి"),
    ("common.class", "Class", "తరగతి"),
    ("common.section", "Section", "విభాగం"),
    ("common.title", "Title", "శీర్షిక"),
    ("common.description", "Description", "వివరణ"),
    // schools
    ("school.add", "Add School", "పాఠశాలను చేర్చండి"),
    ("school.principal", "Principal", "ప్రధానోపాధ్యాయులు"),
    ("school.brand_color", "Brand colour", "బ్రాండ్ రంగు"),
    ("school.active_users", "Active users", "క్రియాశీల వినియోగదారులు"),
    ("school.compliance", "Compliance", "నియమ పాలన"),
    ("compliance.compliant", "Compliant", "అనుగుణంగా ఉంది"),
    ("compliance.pending", "Pending review", "సమీక్ష పెండింగ్"),
    ("compliance.non_compliant", "Non-compliant", "అనుగుణంగా లేదు"),
    // attendance
    ("attendance.present", "Present", "హాజరు"),
    ("attendance.absent", "Absent", "గైర్హాజరు"),
    ("attendance.late", "Late", "ఆలస్యం"),
    ("attendance.excused", "Excused", "అనుమతి పొందినది"),
    ("attendance.rate", "Attendance rate", "హాజరు శాతం"),
    // grades
    ("grades.subject", "Subject", "సబ్జెక్ట్"),
    ("grades.exam", "Exam", "పరీక్ష"),
    ("grades.marks", "Marks", "మార్కులు"),
    ("grades.average", "Average", "సగటు"),
    // timetable
    ("timetable.period", "Period", "పీరియడ్"),
    ("timetable.day", "Day", "రోజు"),
    ("timetable.free", "Free", "ఖాళీ"),
    ("weekday.monday", "Monday", "సోమవారం"),
    ("weekday.tuesday", "Tuesday", "మంగళవారం"),
    ("weekday.wednesday", "Wednesday", "బుధవారం"),
    ("weekday.thursday", "Thursday", "గురువారం"),
    ("weekday.friday", "Friday", "శుక్రవారం"),
    ("weekday.saturday", "Saturday", "శనివారం"),
    // fleet
    ("fleet.bus", "Bus", "బస్సు"),
    ("fleet.route", "Route", "మార్గం"),
    ("fleet.driver", "Driver", "డ్రైవర్"),
    ("fleet.students_onboard", "Students on board", "బస్సులో విద్యార్థులు"),
    ("trip.scheduled", "Scheduled", "షెడ్యూల్ చేయబడింది"),
    ("trip.in_progress", "On the road", "ప్రయాణంలో ఉంది"),
    ("trip.completed", "Completed", "పూర్తయింది"),
    ("trip.delayed", "Delayed", "ఆలస్యమైంది"),
    // tickets
    ("ticket.new", "New Ticket", "కొత్త టికెట్"),
    ("ticket.open", "Open", "తెరిచి ఉంది"),
    ("ticket.in_progress", "In progress", "పురోగతిలో ఉంది"),
    ("ticket.resolved", "Resolved", "పరిష్కరించబడింది"),
    ("ticket.closed", "Closed", "మూసివేయబడింది"),
    ("ticket.priority", "Priority", "ప్రాధాన్యత"),
    ("ticket.comment", "Add comment", "వ్యాఖ్య జోడించండి"),
    // homework & events
    ("homework.due", "Due", "గడువు"),
    ("event.upcoming", "Upcoming events", "రాబోయే కార్యక్రమాలు"),
    // dashboards
    ("dashboard.welcome", "Welcome", "స్వాగతం"),
    ("dashboard.total_schools", "Schools", "పాఠశాలలు"),
    ("dashboard.total_students", "Students", "విద్యార్థులు"),
    ("dashboard.total_teachers", "Teachers", "ఉపాధ్యాయులు"),
    ("dashboard.open_tickets", "Open tickets", "తెరిచిన టికెట్లు"),
    ("dashboard.trips_today", "Trips today", "నేటి ప్రయాణాలు"),
    ("dashboard.quick_actions", "Quick actions", "త్వరిత చర్యలు"),
    // onboarding
    ("onboarding.success", "Saved successfully", "విజయవంతంగా సేవ్ చేయబడింది"),
    ("onboarding.for_school", "Onboarding for", "దీని కోసం ఆన్‌బోర్డింగ్"),
    ("onboarding.missing_field", "Please fill in", "దయచేసి నింపండి"),
    ("onboarding.recent", "Added in this session", "ఈ సెషన్‌లో చేర్చినవి"),
    // people and classes
    ("school.name_te", "Name (Telugu)", "పేరు (తెలుగు)"),
    ("student.name_te", "Name (Telugu)", "పేరు (తెలుగు)"),
    ("student.roll", "Roll No.", "రోల్ నం."),
    ("student.guardian", "Guardian", "సంరక్షకుడు"),
    ("student.guardian_phone", "Guardian phone", "సంరక్షకుని ఫోన్"),
    ("student.date_of_birth", "Date of birth", "పుట్టిన తేదీ"),
    ("student.bus_route", "Bus route", "బస్సు మార్గం"),
    ("teacher.name_te", "Name (Telugu)", "పేరు (తెలుగు)"),
    ("teacher.employee_id", "Employee ID", "ఉద్యోగి ఐడి"),
    ("teacher.subjects", "Subjects", "విషయాలు"),
    ("teacher.qualification", "Qualification", "అర్హత"),
    ("teacher.class_teacher", "Class teacher", "తరగతి ఉపాధ్యాయుడు"),
    ("class.grade", "Grade", "తరగతి స్థాయి"),
    ("class.room", "Room", "గది"),
    ("class.strength", "Strength", "సంఖ్య"),
    ("common.all", "All", "అన్నీ"),
    // validation
    ("validation.required", "is required", "తప్పనిసరి"),
    ("validation.phone", "needs at least 10 digits", "కనీసం 10 అంకెలు ఉండాలి"),
    ("validation.range", "is out of range", "పరిధి దాటింది"),
    // homework and events
    ("homework.assign", "Assign homework", "హోంవర్క్ ఇవ్వండి"),
    ("homework.assigned_on", "Assigned on", "ఇచ్చిన తేదీ"),
    ("homework.overdue", "Overdue", "గడువు దాటింది"),
    ("homework.pending", "Homework due", "చేయాల్సిన హోంవర్క్"),
    ("event.holiday", "Holiday", "సెలవు"),
    ("event.exam", "Exam", "పరీక్ష"),
    ("event.meeting", "Meeting", "సమావేశం"),
    ("event.celebration", "Celebration", "వేడుక"),
    ("event.sports", "Sports", "క్రీడలు"),
    // fleet
    ("fleet.buses", "Buses", "బస్సులు"),
    ("fleet.drivers", "Drivers", "డ్రైవర్లు"),
    ("fleet.trips", "Trips", "ప్రయాణాలు"),
    ("fleet.active_trips", "Active trips", "నడుస్తున్న ప్రయాణాలు"),
    ("fleet.departure", "Departure", "బయలుదేరే సమయం"),
    ("fleet.license", "License No.", "లైసెన్స్ నం."),
    ("trip.pickup", "Pickup", "పికప్"),
    ("trip.drop", "Drop", "డ్రాప్"),
    ("trip.advance", "Advance", "ముందుకు"),
    // tickets
    ("ticket.comments", "Comments", "వ్యాఖ్యలు"),
    ("ticket.open_only", "Open only", "తెరిచినవి మాత్రమే"),
    ("ticket.priority.low", "Low", "తక్కువ"),
    ("ticket.priority.medium", "Medium", "మధ్యస్థం"),
    ("ticket.priority.high", "High", "అధికం"),
    ("ticket.error.closed", "This ticket is closed", "ఈ టికెట్ మూసివేయబడింది"),
    ("ticket.error.empty_comment", "Comment cannot be empty", "వ్యాఖ్య ఖాళీగా ఉండకూడదు"),
    // timetable and dashboards
    ("timetable.assign", "Assign period", "పీరియడ్ కేటాయించండి"),
    ("dashboard.periods_today", "Periods today", "నేటి పీరియడ్లు"),
    ("dashboard.periods_week", "Periods this week", "ఈ వారం పీరియడ్లు"),
    ("notification.mark_all_read", "Mark all as read", "అన్నీ చదివినట్లు గుర్తించండి"),
];

static DICTIONARY: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(key, en, te)| (key, Entry { en, te }))
        .collect()
});

pub(super) fn lookup(key: &str) -> Option<&'static Entry> {
    DICTIONARY.get(key)
}

/// All known translation keys, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|&(key, _, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(DICTIONARY.len(), ENTRIES.len());
    }
}
