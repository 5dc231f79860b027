//! The fixed product template table shared by every provider.

/// One product that every provider catalog cycles through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub base_price: f64,
}

impl ProductTemplate {
    const fn new(name: &'static str, description: &'static str, base_price: f64) -> Self {
        Self {
            name,
            description,
            base_price,
        }
    }
}

/// Templates in cycle order. Item `i` of any provider uses `PRODUCT_TEMPLATES[i % 20]`.
pub const PRODUCT_TEMPLATES: [ProductTemplate; 20] = [
    ProductTemplate::new(
        "Gaming Laptop Pro",
        "High-performance gaming laptop with RTX 4080",
        2499.99,
    ),
    ProductTemplate::new(
        "Wireless Gaming Mouse",
        "Ergonomic wireless mouse for gaming",
        89.99,
    ),
    ProductTemplate::new(
        "Mechanical Keyboard",
        "RGB mechanical keyboard with Cherry MX switches",
        159.99,
    ),
    ProductTemplate::new(
        "4K Monitor 32\"",
        "Ultra HD gaming monitor with 144Hz refresh rate",
        599.99,
    ),
    ProductTemplate::new(
        "Gaming Chair",
        "Ergonomic gaming chair with lumbar support",
        349.99,
    ),
    ProductTemplate::new("USB-C Hub", "7-in-1 USB-C hub with HDMI and Ethernet", 49.99),
    ProductTemplate::new("Webcam HD", "1080p HD webcam with auto-focus", 79.99),
    ProductTemplate::new(
        "Bluetooth Headset",
        "Noise-cancelling Bluetooth headset",
        129.99,
    ),
    ProductTemplate::new(
        "External SSD 1TB",
        "Portable external SSD with 1TB storage",
        149.99,
    ),
    ProductTemplate::new(
        "Graphics Tablet",
        "Digital drawing tablet for artists",
        199.99,
    ),
    ProductTemplate::new(
        "Smart Watch",
        "Fitness smart watch with heart rate monitor",
        249.99,
    ),
    ProductTemplate::new(
        "Wireless Earbuds",
        "True wireless earbuds with charging case",
        99.99,
    ),
    ProductTemplate::new(
        "USB Microphone",
        "Professional USB condenser microphone",
        119.99,
    ),
    ProductTemplate::new("Laptop Stand", "Adjustable aluminum laptop stand", 39.99),
    ProductTemplate::new("Portable Charger", "20000mAh portable power bank", 44.99),
    ProductTemplate::new("RGB Mouse Pad", "Extended RGB gaming mouse pad", 34.99),
    ProductTemplate::new(
        "Cable Management",
        "Cable management kit for desk setup",
        19.99,
    ),
    ProductTemplate::new(
        "Phone Holder",
        "Adjustable phone holder with wireless charging",
        29.99,
    ),
    ProductTemplate::new(
        "LED Desk Lamp",
        "Smart LED desk lamp with USB charging",
        54.99,
    ),
    ProductTemplate::new(
        "Bluetooth Speaker",
        "Portable Bluetooth speaker with bass boost",
        69.99,
    ),
];

/// Template used for the item at zero-based position `index`.
pub fn template_for(index: usize) -> &'static ProductTemplate {
    &PRODUCT_TEMPLATES[index % PRODUCT_TEMPLATES.len()]
}
