pub fn render() -> String {
    [
        "Freshness Delivered",
        "Straight from the Soil",
        "",
        "Connect directly with local farmers. Quality organic produce, fair prices,",
        "and swift delivery to your doorstep.",
        "",
        "  Get Started  -> register <name> <email> --role <consumer|farmer|delivery>",
        "  Login Now    -> login <email> --role <consumer|farmer|delivery>",
        "",
        "For Farmers",
        "  List your harvest directly to consumers. Get the best price for your",
        "  hard work without middlemen.",
        "For Consumers",
        "  Access 100% organic, farm-fresh products. Transparent pricing and",
        "  quality assurance.",
        "Delivery Network",
        "  Flexible earning opportunities. Deliver fresh produce based on distance",
        "  and availability.",
    ]
    .join("\n")
}
