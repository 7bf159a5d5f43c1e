//! Built-in content served when the database is disabled or unreachable.
//!
//! Each dataset is shaped exactly like the rows the store returns. The hero
//! slides and navigation entries double as the seed rows inserted on first boot.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::{
    CaseStudy, HeroSlide, LabEquipment, NavigationItem, News, Page, Product, Solution, SpecEntry,
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "PowerCube Home 10".into(),
            slug: "powercube-home-10".into(),
            description: Some(
                "Wall-mounted lithium iron phosphate battery for residential solar self-consumption."
                    .into(),
            ),
            image: Some("/images/products/powercube-home-10.jpg".into()),
            category: Some("residential".into()),
            features: strings(&["LFP cells", "Modular stacking up to 30 kWh", "IP65 enclosure"]),
            specifications: vec![
                SpecEntry::new("Usable capacity", "10 kWh"),
                SpecEntry::new("Nominal voltage", "51.2 V"),
                SpecEntry::new("Cycle life", "6000 cycles @ 90% DoD"),
            ],
            applications: strings(&["Solar self-consumption", "Backup power"]),
            benefits: strings(&["Lower electricity bills", "Quiet operation"]),
            is_featured: true,
            is_active: true,
            price: Some(Decimal::new(489_900, 2)),
            created_at: date(2024, 3, 1),
            updated_at: date(2024, 3, 1),
        },
        Product {
            id: 2,
            name: "GridStack C&I 215".into(),
            slug: "gridstack-ci-215".into(),
            description: Some(
                "Outdoor cabinet system for commercial and industrial peak shaving.".into(),
            ),
            image: Some("/images/products/gridstack-ci-215.jpg".into()),
            category: Some("commercial".into()),
            features: strings(&["Liquid cooling", "Integrated PCS", "Remote monitoring"]),
            specifications: vec![
                SpecEntry::new("Rated energy", "215 kWh"),
                SpecEntry::new("Rated power", "100 kW"),
            ],
            applications: strings(&["Peak shaving", "Demand charge reduction"]),
            benefits: strings(&["Fast payback", "Plug-and-play installation"]),
            is_featured: true,
            is_active: true,
            price: None,
            created_at: date(2024, 2, 10),
            updated_at: date(2024, 2, 10),
        },
        Product {
            id: 3,
            name: "UtilityBlock 3.7".into(),
            slug: "utilityblock-3-7".into(),
            description: Some("Containerised 3.7 MWh block for utility-scale storage plants.".into()),
            image: Some("/images/products/utilityblock-3-7.jpg".into()),
            category: Some("utility".into()),
            features: strings(&["20 ft container", "Fire suppression", "Grid-forming ready"]),
            specifications: vec![SpecEntry::new("Rated energy", "3.7 MWh")],
            applications: strings(&["Frequency regulation", "Renewable firming"]),
            benefits: strings(&["High energy density"]),
            is_featured: false,
            is_active: true,
            price: None,
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 15),
        },
    ]
}

pub fn solutions() -> Vec<Solution> {
    vec![
        Solution {
            id: 1,
            title: "Residential Energy Storage".into(),
            slug: "residential-energy-storage".into(),
            summary: Some("Store rooftop solar for the evening and ride through outages.".into()),
            content: None,
            image: Some("/images/solutions/residential.jpg".into()),
            category: Some("residential".into()),
            features: strings(&["Backup power", "Time-of-use optimisation"]),
            is_active: true,
            created_at: date(2024, 1, 5),
            updated_at: date(2024, 1, 5),
        },
        Solution {
            id: 2,
            title: "Commercial Peak Shaving".into(),
            slug: "commercial-peak-shaving".into(),
            summary: Some("Cut demand charges by discharging during site peaks.".into()),
            content: None,
            image: Some("/images/solutions/peak-shaving.jpg".into()),
            category: Some("commercial".into()),
            features: strings(&["Load forecasting", "Automatic dispatch"]),
            is_active: true,
            created_at: date(2024, 1, 6),
            updated_at: date(2024, 1, 6),
        },
        Solution {
            id: 3,
            title: "Microgrid Integration".into(),
            slug: "microgrid-integration".into(),
            summary: Some("Islanded and grid-tied microgrids combining PV, diesel and storage.".into()),
            content: None,
            image: Some("/images/solutions/microgrid.jpg".into()),
            category: Some("utility".into()),
            features: strings(&["Seamless islanding", "Generator hybridisation"]),
            is_active: true,
            created_at: date(2024, 1, 7),
            updated_at: date(2024, 1, 7),
        },
    ]
}

pub fn news() -> Vec<News> {
    vec![
        News {
            id: 1,
            title: "New 215 kWh cabinet enters mass production".into(),
            slug: "gridstack-mass-production".into(),
            excerpt: Some("The GridStack C&I 215 line is now shipping worldwide.".into()),
            content: None,
            image: Some("/images/news/gridstack-production.jpg".into()),
            category: Some("company".into()),
            author: Some("Communications Team".into()),
            published_at: Some(date(2024, 4, 2)),
            is_published: true,
            created_at: date(2024, 4, 2),
            updated_at: date(2024, 4, 2),
        },
        News {
            id: 2,
            title: "Battery test laboratory receives accreditation".into(),
            slug: "lab-accreditation".into(),
            excerpt: Some("Our in-house lab is now accredited for cell and pack testing.".into()),
            content: None,
            image: Some("/images/news/lab-accreditation.jpg".into()),
            category: Some("industry".into()),
            author: Some("Communications Team".into()),
            published_at: Some(date(2024, 3, 18)),
            is_published: true,
            created_at: date(2024, 3, 18),
            updated_at: date(2024, 3, 18),
        },
    ]
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: 1,
            title: "Cold storage warehouse peak shaving".into(),
            slug: "cold-storage-peak-shaving".into(),
            client: Some("Nordic Logistics".into()),
            location: Some("Rotterdam, NL".into()),
            summary: Some("Two GridStack cabinets cut the site's demand charges by 28%.".into()),
            content: None,
            image: Some("/images/cases/cold-storage.jpg".into()),
            category: Some("commercial".into()),
            is_published: true,
            created_at: date(2024, 2, 20),
            updated_at: date(2024, 2, 20),
        },
        CaseStudy {
            id: 2,
            title: "Island microgrid for a resort".into(),
            slug: "island-resort-microgrid".into(),
            client: Some("Blue Lagoon Resort".into()),
            location: Some("Maldives".into()),
            summary: Some("Solar plus 4 MWh of storage replaced most diesel generation.".into()),
            content: None,
            image: Some("/images/cases/island-microgrid.jpg".into()),
            category: Some("utility".into()),
            is_published: true,
            created_at: date(2024, 1, 28),
            updated_at: date(2024, 1, 28),
        },
    ]
}

pub fn lab_equipment() -> Vec<LabEquipment> {
    vec![
        LabEquipment {
            id: 1,
            name: "Battery Cycler 512-Channel".into(),
            slug: "battery-cycler-512".into(),
            description: Some("Charge/discharge cycling of cells and modules.".into()),
            image: Some("/images/lab/cycler.jpg".into()),
            category: Some("testing".into()),
            specifications: vec![
                SpecEntry::new("Channels", "512"),
                SpecEntry::new("Current range", "±100 A"),
            ],
            is_active: true,
            created_at: date(2023, 11, 1),
            updated_at: date(2023, 11, 1),
        },
        LabEquipment {
            id: 2,
            name: "Thermal Climate Chamber".into(),
            slug: "thermal-climate-chamber".into(),
            description: Some("Environmental testing from -40 °C to +85 °C.".into()),
            image: Some("/images/lab/climate-chamber.jpg".into()),
            category: Some("environmental".into()),
            specifications: vec![SpecEntry::new("Temperature range", "-40 °C to +85 °C")],
            is_active: true,
            created_at: date(2023, 11, 2),
            updated_at: date(2023, 11, 2),
        },
    ]
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            id: 1,
            title: "Energy storage for every scale".into(),
            description: Some("From home batteries to utility plants.".into()),
            cta_label: Some("Explore products".into()),
            cta_link: Some("/products".into()),
            image: Some("/images/hero/scale.jpg".into()),
            category: Some("products".into()),
            position: 1,
            is_active: true,
        },
        HeroSlide {
            id: 2,
            title: "Cut peak demand charges".into(),
            description: Some("Commercial storage that pays for itself.".into()),
            cta_label: Some("See solutions".into()),
            cta_link: Some("/solutions".into()),
            image: Some("/images/hero/peak.jpg".into()),
            category: Some("solutions".into()),
            position: 2,
            is_active: true,
        },
        HeroSlide {
            id: 3,
            title: "Tested in our own laboratory".into(),
            description: Some("Every design is cycled, heated and frozen before release.".into()),
            cta_label: Some("Visit the lab".into()),
            cta_link: Some("/lab".into()),
            image: Some("/images/hero/lab.jpg".into()),
            category: Some("lab".into()),
            position: 3,
            is_active: true,
        },
    ]
}

/// Flat menu rows; `parent_id` links children to their section
pub fn navigation_items() -> Vec<NavigationItem> {
    fn item(id: u64, label: &str, href: &str, parent_id: Option<u64>, position: i32) -> NavigationItem {
        NavigationItem {
            id,
            label: label.into(),
            href: href.into(),
            parent_id,
            position,
            is_external: false,
            is_active: true,
        }
    }

    vec![
        item(1, "Home", "/", None, 1),
        item(2, "Products", "/products", None, 2),
        item(3, "Residential", "/products?category=residential", Some(2), 1),
        item(4, "Commercial", "/products?category=commercial", Some(2), 2),
        item(5, "Utility", "/products?category=utility", Some(2), 3),
        item(6, "Solutions", "/solutions", None, 3),
        item(7, "News", "/news", None, 4),
        item(8, "Case Studies", "/case-studies", None, 5),
        item(9, "Contact", "/contact", None, 6),
    ]
}

pub fn pages() -> Vec<Page> {
    vec![
        Page {
            id: 1,
            title: "About Us".into(),
            slug: "about".into(),
            content: Some("We design and manufacture battery energy storage systems.".into()),
            meta_description: Some("About our company".into()),
            is_published: true,
            created_at: date(2023, 10, 1),
            updated_at: date(2023, 10, 1),
        },
        Page {
            id: 2,
            title: "Privacy Policy".into(),
            slug: "privacy".into(),
            content: None,
            meta_description: None,
            is_published: true,
            created_at: date(2023, 10, 1),
            updated_at: date(2023, 10, 1),
        },
    ]
}
