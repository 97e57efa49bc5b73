//! Static occupation directory (NOC 2021).
//!
//! A free-text search resolves to one of these records; the record's TEER
//! tier and sector category feed scoring and the category-draw matcher.

/// One occupation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupation {
    /// 5-character NOC code.
    pub code: &'static str,
    /// Occupation title.
    pub title: &'static str,
    /// TEER tier, 0 (most skilled) through 5.
    pub teer: u8,
    /// Sector category label.
    pub category: &'static str,
}

/// Maximum number of records returned by [`search`].
pub const MAX_RESULTS: usize = 8;

/// Search the directory by title substring or code substring,
/// case-insensitively, returning at most [`MAX_RESULTS`] records.
pub fn search(query: &str) -> Vec<&'static Occupation> {
    let query = query.trim().to_lowercase();
    if query.len() < 2 {
        return Vec::new();
    }
    DIRECTORY
        .iter()
        .filter(|noc| noc.title.to_lowercase().contains(&query) || noc.code.contains(&query))
        .take(MAX_RESULTS)
        .collect()
}

/// Look up a record by exact code.
pub fn by_code(code: &str) -> Option<&'static Occupation> {
    DIRECTORY.iter().find(|noc| noc.code == code)
}

/// The occupation recorded in the answer store, if one was picked.
pub fn selected(answers: &truenorth_types::Answers) -> Option<&'static Occupation> {
    by_code(answers.text("occupation")?)
}

macro_rules! occ {
    ($code:literal, $title:literal, $teer:literal, $category:literal) => {
        Occupation {
            code: $code,
            title: $title,
            teer: $teer,
            category: $category,
        }
    };
}

/// The full static table, grouped by sector.
pub static DIRECTORY: &[Occupation] = &[
    // TEER 0 - Management
    occ!("00010", "Senior Managers - Finance", 0, "Management"),
    occ!("00012", "Senior Managers - Trade", 0, "Management"),
    occ!("00013", "Senior Managers - Construction", 0, "Management"),
    occ!("00014", "Senior Managers - Manufacturing", 0, "Management"),
    occ!("00015", "Senior Managers - Transportation", 0, "Management"),
    occ!("10010", "Financial Managers", 0, "Management"),
    occ!("10011", "Human Resources Managers", 0, "Management"),
    occ!("10012", "Purchasing Managers", 0, "Management"),
    occ!("10019", "Other Business Managers", 0, "Management"),
    occ!("10020", "Telecommunications Managers", 0, "Management"),
    occ!("20010", "Engineering Managers", 0, "Management"),
    occ!("20011", "Architecture Managers", 0, "Management"),
    occ!("20012", "IT Managers", 0, "Management"),
    occ!("30010", "Healthcare Managers", 0, "Management"),
    occ!("40010", "Government Managers - Policy", 0, "Management"),
    occ!("40020", "Administrators - Post-secondary", 0, "Management"),
    occ!("60010", "Restaurant/Food Service Managers", 0, "Management"),
    occ!("60020", "Accommodation Service Managers", 0, "Management"),
    occ!("60030", "Retail/Wholesale Trade Managers", 0, "Management"),
    occ!("70010", "Construction Managers", 0, "Management"),
    occ!("70012", "Facility Operations Managers", 0, "Management"),
    occ!("80010", "Agricultural Managers", 0, "Management"),
    // STEM & Tech
    occ!("21231", "Software Engineers", 1, "STEM"),
    occ!("21232", "Software Developers", 1, "STEM"),
    occ!("21211", "Data Scientists", 1, "STEM"),
    occ!("21210", "Mathematicians/Statisticians", 1, "STEM"),
    occ!("21220", "Cybersecurity Analysts", 1, "STEM"),
    occ!("21221", "Business Systems Specialists", 1, "STEM"),
    occ!("21222", "Information Systems Specialists", 1, "STEM"),
    occ!("21223", "Database Analysts", 1, "STEM"),
    occ!("21230", "Computer Systems Developers", 1, "STEM"),
    occ!("21300", "Civil Engineers", 1, "STEM"),
    occ!("21301", "Mechanical Engineers", 1, "STEM"),
    occ!("21310", "Electrical/Electronics Engineers", 1, "STEM"),
    occ!("21311", "Computer Engineers", 1, "STEM"),
    occ!("21320", "Chemical Engineers", 1, "STEM"),
    occ!("21330", "Mining Engineers", 1, "STEM"),
    occ!("21340", "Petroleum Engineers", 1, "STEM"),
    occ!("21390", "Aerospace Engineers", 1, "STEM"),
    occ!("22100", "Chemical Technologists", 1, "STEM"),
    occ!("21100", "Physicists/Astronomers", 1, "STEM"),
    occ!("21101", "Chemists", 1, "STEM"),
    occ!("21102", "Geoscientists", 1, "STEM"),
    occ!("21110", "Biologists", 1, "STEM"),
    occ!("21112", "Agricultural Scientists", 1, "STEM"),
    occ!("22110", "Biological Technologists", 1, "STEM"),
    occ!("21234", "Web Developers", 2, "STEM"),
    occ!("21233", "Web Designers", 2, "STEM"),
    occ!("22220", "Computer Network Technicians", 2, "STEM"),
    occ!("22221", "User Support Technicians", 2, "STEM"),
    occ!("22222", "Information Systems Testing", 2, "STEM"),
    // Healthcare
    occ!("31100", "Physicians - Specialists", 0, "Healthcare"),
    occ!("31101", "Physicians - General Practitioners", 0, "Healthcare"),
    occ!("31102", "Family Physicians", 0, "Healthcare"),
    occ!("31110", "Dentists", 0, "Healthcare"),
    occ!("31111", "Veterinarians", 1, "Healthcare"),
    occ!("31112", "Optometrists", 1, "Healthcare"),
    occ!("31120", "Pharmacists", 1, "Healthcare"),
    occ!("31121", "Dietitians/Nutritionists", 1, "Healthcare"),
    occ!("31200", "Psychologists", 1, "Healthcare"),
    occ!("31201", "Chiropractors", 1, "Healthcare"),
    occ!("31202", "Physiotherapists", 1, "Healthcare"),
    occ!("31203", "Occupational Therapists", 1, "Healthcare"),
    occ!("31204", "Audiologists/Speech Pathologists", 1, "Healthcare"),
    occ!("31301", "Registered Nurses", 1, "Healthcare"),
    occ!("31302", "Nurse Practitioners", 1, "Healthcare"),
    occ!("31303", "Physician Assistants", 1, "Healthcare"),
    occ!("32101", "Licensed Practical Nurses", 2, "Healthcare"),
    occ!("32102", "Paramedics", 2, "Healthcare"),
    occ!("32103", "Respiratory Therapists", 2, "Healthcare"),
    occ!("32109", "Other Therapy Professionals", 2, "Healthcare"),
    occ!("32110", "Dental Hygienists", 2, "Healthcare"),
    occ!("32111", "Dental Technologists", 2, "Healthcare"),
    occ!("32120", "Medical Lab Technologists", 2, "Healthcare"),
    occ!("32121", "Medical Radiation Technologists", 2, "Healthcare"),
    occ!("32122", "Medical Sonographers", 2, "Healthcare"),
    occ!("32123", "Cardiology Technologists", 2, "Healthcare"),
    occ!("33100", "Dental Assistants", 3, "Healthcare"),
    occ!("33101", "Medical Lab Assistants", 3, "Healthcare"),
    occ!("33102", "Nurse Aides/Patient Care Aides", 3, "Healthcare"),
    occ!("33103", "Pharmacy Technicians", 3, "Healthcare"),
    // Business & Finance
    occ!("11100", "Financial Auditors/Accountants", 1, "Business"),
    occ!("11101", "Financial/Investment Analysts", 1, "Business"),
    occ!("11102", "Financial Advisors", 1, "Business"),
    occ!("11103", "Securities Agents/Investment Dealers", 1, "Business"),
    occ!("11200", "Human Resources Professionals", 1, "Business"),
    occ!("11201", "Business Management Consultants", 1, "Business"),
    occ!("11202", "Advertising/Marketing Professionals", 1, "Business"),
    occ!("12010", "Supervisors - Finance/Insurance", 2, "Business"),
    occ!("12011", "Supervisors - Administrative", 2, "Business"),
    occ!("12100", "Executive Assistants", 2, "Business"),
    occ!("12101", "Human Resources Officers", 2, "Business"),
    occ!("12102", "Purchasing Agents", 2, "Business"),
    occ!("12103", "Insurance Adjusters/Claims Examiners", 2, "Business"),
    occ!("12200", "Accounting Technicians", 2, "Business"),
    occ!("13100", "Administrative Officers", 2, "Business"),
    occ!("13101", "Property Administrators", 2, "Business"),
    occ!("13110", "Administrative Assistants", 3, "Business"),
    occ!("13111", "Legal Administrative Assistants", 3, "Business"),
    occ!("13112", "Medical Administrative Assistants", 3, "Business"),
    occ!("14100", "General Office Workers", 4, "Business"),
    occ!("14101", "Receptionists", 4, "Business"),
    occ!("14110", "Data Entry Clerks", 4, "Business"),
    // Education & Social
    occ!("41200", "University Professors", 1, "Education"),
    occ!("41201", "Post-secondary Assistants/Instructors", 1, "Education"),
    occ!("41210", "College Instructors", 1, "Education"),
    occ!("41220", "Secondary School Teachers", 1, "Education"),
    occ!("41221", "Elementary School Teachers", 1, "Education"),
    occ!("41300", "Social Workers", 1, "Education"),
    occ!("41301", "Therapists - Counselling", 1, "Education"),
    occ!("41310", "Police Officers", 2, "Education"),
    occ!("41311", "Firefighters", 2, "Education"),
    occ!("42100", "Paralegals", 2, "Education"),
    occ!("42201", "Early Childhood Educators", 2, "Education"),
    occ!("42202", "Educational Assistants", 3, "Education"),
    // Construction & Trades
    occ!("72010", "Contractors/Supervisors - Electrical", 2, "Trades"),
    occ!("72011", "Contractors/Supervisors - Pipefitting", 2, "Trades"),
    occ!("72013", "Contractors/Supervisors - Carpentry", 2, "Trades"),
    occ!("72020", "Contractors/Supervisors - Mechanic Trades", 2, "Trades"),
    occ!("72100", "Machinists", 2, "Trades"),
    occ!("72101", "Tool and Die Makers", 2, "Trades"),
    occ!("72102", "Sheet Metal Workers", 2, "Trades"),
    occ!("72103", "Boilermakers", 2, "Trades"),
    occ!("72105", "Ironworkers", 2, "Trades"),
    occ!("72106", "Welders", 2, "Trades"),
    occ!("72200", "Electricians (Except Industrial)", 2, "Trades"),
    occ!("72201", "Industrial Electricians", 2, "Trades"),
    occ!("72300", "Plumbers", 2, "Trades"),
    occ!("72301", "Steamfitters/Pipefitters", 2, "Trades"),
    occ!("72302", "Gas Fitters", 2, "Trades"),
    occ!("72310", "Carpenters", 2, "Trades"),
    occ!("72311", "Cabinetmakers", 2, "Trades"),
    occ!("72320", "Bricklayers", 2, "Trades"),
    occ!("72400", "Construction Millwrights", 2, "Trades"),
    occ!("72401", "Industrial Mechanics", 2, "Trades"),
    occ!("72402", "Heavy Duty Equipment Mechanics", 2, "Trades"),
    occ!("72403", "Refrigeration Mechanics (HVAC)", 2, "Trades"),
    occ!("72410", "Automotive Service Technicians", 2, "Trades"),
    occ!("72500", "Crane Operators", 2, "Trades"),
    occ!("73100", "Concrete/Tile Setters", 3, "Trades"),
    occ!("73101", "Plasterers/Drywall Installers", 3, "Trades"),
    occ!("73102", "Roofers", 3, "Trades"),
    occ!("73110", "Glaziers", 3, "Trades"),
    occ!("73111", "Painters/Decorators", 3, "Trades"),
    occ!("73112", "Floor Covering Installers", 3, "Trades"),
    occ!("73200", "Residential/Commercial Installers", 3, "Trades"),
    // Transport
    occ!("72600", "Air Pilots/Flight Engineers", 2, "Transport"),
    occ!("72601", "Air Traffic Controllers", 2, "Transport"),
    occ!("72602", "Deck Officers - Water Transport", 2, "Transport"),
    occ!("72604", "Railway Conductors", 2, "Transport"),
    occ!("73300", "Transport Truck Drivers", 3, "Transport"),
    occ!("73301", "Bus Drivers/Subway Operators", 3, "Transport"),
    occ!("73310", "Delivery/Courier Drivers", 4, "Transport"),
    occ!("73311", "Taxi/Ride-share Drivers", 4, "Transport"),
    // Food & Hospitality
    occ!("62100", "Chefs", 2, "Hospitality"),
    occ!("62200", "Cooks", 3, "Hospitality"),
    occ!("62020", "Food Service Supervisors", 2, "Hospitality"),
    occ!("63200", "Bakers", 3, "Hospitality"),
    occ!("63201", "Butchers/Meat Cutters", 3, "Hospitality"),
    occ!("63202", "Fish/Seafood Plant Workers", 4, "Hospitality"),
    occ!("64300", "Bartenders", 4, "Hospitality"),
    occ!("64301", "Food/Beverage Servers", 4, "Hospitality"),
    occ!("64310", "Hotel Front Desk Clerks", 4, "Hospitality"),
    occ!("64311", "Tour Guides", 4, "Hospitality"),
    occ!("64320", "Maids/Housekeepers", 4, "Hospitality"),
    occ!("65200", "Food Counter Attendants", 5, "Hospitality"),
    occ!("65201", "Food Preparers/Kitchen Helpers", 5, "Hospitality"),
    occ!("63210", "Hairstylists/Barbers", 3, "Hospitality"),
    occ!("63211", "Estheticians", 3, "Hospitality"),
    // Retail & Sales
    occ!("62010", "Retail Sales Supervisors", 2, "Sales"),
    occ!("62021", "Technical Sales Specialists", 2, "Sales"),
    occ!("62022", "Retail Buyers", 2, "Sales"),
    occ!("62023", "Insurance Agents/Brokers", 2, "Sales"),
    occ!("62024", "Real Estate Agents", 2, "Sales"),
    occ!("64100", "Retail Salespersons", 4, "Sales"),
    occ!("64101", "Cashiers", 5, "Sales"),
    // Agriculture
    occ!("82010", "Supervisors - Logging/Forestry", 2, "Agriculture"),
    occ!("82011", "Contractors - Landscaping", 2, "Agriculture"),
    occ!("82020", "Supervisors - Agriculture", 2, "Agriculture"),
    occ!("82021", "Supervisors - Aquaculture", 2, "Agriculture"),
    occ!("84100", "Agricultural Equipment Operators", 4, "Agriculture"),
    occ!("84120", "Specialized Livestock Workers", 4, "Agriculture"),
    occ!("83100", "General Farm Workers", 4, "Agriculture"),
    occ!("85100", "Livestock Labourers", 5, "Agriculture"),
    occ!("85101", "Harvesting Labourers", 5, "Agriculture"),
    occ!("85102", "Nursery/Greenhouse Workers", 5, "Agriculture"),
    // Manufacturing & Processing
    occ!("92010", "Supervisors - Mineral Processing", 2, "Manufacturing"),
    occ!("92012", "Supervisors - Chemical Processing", 2, "Manufacturing"),
    occ!("92020", "Supervisors - Food Processing", 2, "Manufacturing"),
    occ!("92100", "Power Engineers", 2, "Manufacturing"),
    occ!("92101", "Water Treatment Operators", 2, "Manufacturing"),
    occ!("93100", "Central Control Operators - Petroleum", 3, "Manufacturing"),
    occ!("94100", "Machine Operators - Metalworking", 4, "Manufacturing"),
    occ!("94105", "Machine Operators - Food/Beverage", 4, "Manufacturing"),
    occ!("95100", "Labourers - Mineral Processing", 5, "Manufacturing"),
    occ!("95106", "Labourers - Food/Beverage Processing", 5, "Manufacturing"),
    // Arts & Media
    occ!("51111", "Authors/Writers", 1, "Arts"),
    occ!("51112", "Technical Writers", 1, "Arts"),
    occ!("51120", "Journalists", 1, "Arts"),
    occ!("52100", "Film/Video Camera Operators", 2, "Arts"),
    occ!("52110", "Graphic Designers", 2, "Arts"),
    occ!("52112", "Interior Designers", 2, "Arts"),
    occ!("51100", "Librarians", 1, "Arts"),
    // Service & Protective
    occ!("64410", "Security Guards", 4, "Service"),
    occ!("65310", "Light Duty Cleaners", 5, "Service"),
    occ!("65312", "Janitors/Caretakers", 4, "Service"),
    // Caregiving
    occ!("44100", "Home Child Care Providers", 4, "Caregiving"),
    occ!("44101", "Home Support Workers", 4, "Caregiving"),
];
