//! Static reference data for the registration form
//!
//! Lookup tables backing the form's closed-list selections. All tables are
//! process-wide constants.

/// Religions offered by the religion selector
pub const RELIGIONS: &[&str] = &[
    "Hinduism",
    "Islam",
    "Christianity",
    "Sikhism",
    "Buddhism",
    "Jainism",
    "Zoroastrianism",
    "Judaism",
    "Bahai",
    "Other",
];

/// Blood groups offered by the blood group selector
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Marital statuses offered by the marital status selector
pub const MARITAL_STATUSES: &[&str] = &["unmarried", "married"];

/// Guardian relation labels
pub const GUARDIAN_RELATIONS: &[&str] = &["S/O", "D/O", "W/O", "H/O", "C/O"];

/// Default value for the country and nationality fields
pub const DEFAULT_COUNTRY: &str = "India";

/// State to city mapping, in selector order
pub const CITIES_BY_STATE: &[(&str, &[&str])] = &[
    (
        "Andhra Pradesh",
        &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Tirupati"],
    ),
    ("Arunachal Pradesh", &["Itanagar", "Naharlagun", "Pasighat"]),
    ("Assam", &["Guwahati", "Silchar", "Dibrugarh", "Jorhat"]),
    ("Bihar", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur"]),
    ("Chhattisgarh", &["Raipur", "Bhilai", "Bilaspur", "Korba"]),
    ("Goa", &["Panaji", "Margao", "Vasco da Gama", "Mapusa"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Gandhinagar"]),
    ("Haryana", &["Gurugram", "Faridabad", "Panipat", "Ambala"]),
    ("Himachal Pradesh", &["Shimla", "Manali", "Dharamshala", "Solan"]),
    ("Jharkhand", &["Ranchi", "Jamshedpur", "Dhanbad", "Bokaro"]),
    (
        "Karnataka",
        &["Bengaluru", "Mysuru", "Mangaluru", "Hubballi", "Belagavi"],
    ),
    ("Kerala", &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur"]),
    ("Madhya Pradesh", &["Bhopal", "Indore", "Gwalior", "Jabalpur"]),
    (
        "Maharashtra",
        &["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"],
    ),
    ("Manipur", &["Imphal", "Thoubal", "Bishnupur"]),
    ("Meghalaya", &["Shillong", "Tura", "Jowai"]),
    ("Mizoram", &["Aizawl", "Lunglei", "Champhai"]),
    ("Nagaland", &["Kohima", "Dimapur", "Mokokchung"]),
    ("Odisha", &["Bhubaneswar", "Cuttack", "Rourkela", "Puri"]),
    ("Punjab", &["Ludhiana", "Amritsar", "Jalandhar", "Patiala"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Udaipur", "Kota", "Ajmer"]),
    ("Sikkim", &["Gangtok", "Namchi", "Gyalshing"]),
    (
        "Tamil Nadu",
        &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem"],
    ),
    (
        "Telangana",
        &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar"],
    ),
    ("Tripura", &["Agartala", "Udaipur", "Dharmanagar"]),
    (
        "Uttar Pradesh",
        &["Lucknow", "Kanpur", "Varanasi", "Agra", "Prayagraj"],
    ),
    ("Uttarakhand", &["Dehradun", "Haridwar", "Nainital", "Haldwani"]),
    ("West Bengal", &["Kolkata", "Howrah", "Durgapur", "Siliguri"]),
    ("Delhi", &["New Delhi", "Dwarka", "Rohini"]),
    ("Jammu and Kashmir", &["Srinagar", "Jammu", "Anantnag"]),
];

/// All state names, in selector order
pub fn states() -> impl Iterator<Item = &'static str> {
    CITIES_BY_STATE.iter().map(|(state, _)| *state)
}

/// Cities for a state; empty when the state is unknown
#[must_use]
pub fn cities_for(state: &str) -> &'static [&'static str] {
    CITIES_BY_STATE
        .iter()
        .find(|(name, _)| *name == state)
        .map_or(&[], |(_, cities)| *cities)
}

/// Whether a state name is known
#[must_use]
pub fn is_known_state(state: &str) -> bool {
    CITIES_BY_STATE.iter().any(|(name, _)| *name == state)
}
