//! Built-in knowledge catalog for the Spindle Yarns assistant.
//!
//! Forty-one topics covering products, ordering, policies, company
//! background, and small talk. Keywords seed similarity matching;
//! `detail` text (where present) widens the matching corpus without
//! being shown to visitors. Catalog order is the ranking tie-break
//! order and is stable.

use super::{KnowledgeEntry, Response, Template};

/// Literal response shorthand.
fn literal(text: &str) -> Response {
    Response::Literal(text.to_owned())
}

/// All catalog entries, in canonical order.
pub fn entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "product",
            &[
                "yarn", "product", "collection", "buy", "purchase", "material", "catalog", "type",
                "variety", "stock", "available", "offer",
            ],
            literal(
                "We offer a variety of high-quality yarns including recycled, OE, ring spun, and \
                 vortex yarns. You can browse our full collection on the Products page. Our \
                 specialties include cotton, polyester, and blended yarns in various counts and \
                 qualities.",
            ),
            &[
                "What are your bestselling yarns?",
                "Do you offer organic yarns?",
                "What yarn counts do you offer?",
            ],
        )
        .with_detail(
            "We offer a variety of high-quality yarns including recycled, OE, ring spun, and \
             vortex yarns. Our product categories include cotton yarns (Ne 4 to Ne 80), polyester \
             yarns (Ne 10 to Ne 60), blended yarns (Ne 6 to Ne 50), and specialty yarns. Cotton \
             variants include organic, recycled, combed, and carded. Polyester options include \
             virgin, recycled, and textured. Our production technologies include Ring Spinning, \
             Open-End Spinning, and Vortex Spinning.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "price",
            &[
                "price", "cost", "how much", "pricing", "discount", "affordable", "expensive",
                "budget", "quote", "offer", "deal",
            ],
            literal(
                "Our pricing varies based on yarn type, quantity, and specifications. For \
                 detailed pricing, please visit our Products page or contact our sales team. We \
                 offer competitive rates for bulk orders and regular customers may qualify for \
                 special discounts.",
            ),
            &[
                "Do you offer bulk discounts?",
                "What's your minimum order quantity?",
                "How can I get a price quote?",
            ],
        ),
        KnowledgeEntry::new(
            "shipping",
            &[
                "ship", "delivery", "receive", "shipping", "time", "when", "arrive", "transit",
                "courier", "track", "package", "send",
            ],
            literal(
                "We offer standard shipping (3-5 business days) and express shipping (1-2 \
                 business days). International shipping is also available for most locations. \
                 Once your order is processed, you'll receive a tracking number to monitor your \
                 shipment in real-time.",
            ),
            &[
                "Do you ship internationally?",
                "How can I track my order?",
                "What are your shipping rates?",
            ],
        ),
        KnowledgeEntry::new(
            "return",
            &[
                "return", "refund", "cancel", "exchange", "money back", "policy", "damaged",
                "wrong", "unsatisfied", "quality issue",
            ],
            literal(
                "We offer a 30-day return policy for unopened products. Please contact our \
                 customer service with your order number to initiate a return. For quality issues \
                 or damaged items, please provide photos for our quality assurance team to \
                 assess.",
            ),
            &[
                "How do I return a damaged product?",
                "Can I exchange my order?",
                "What's your refund process?",
            ],
        ),
        KnowledgeEntry::new(
            "contact",
            &[
                "contact", "email", "phone", "call", "support", "talk", "reach", "service",
                "help", "assistance", "representative", "chat",
            ],
            literal(
                "You can reach our team at support@spindleyarns.in or call us at +91 99940 \
                 11223. Our offices are located at 27-4 Mill Road, Karur Sukkaliyur. Our customer \
                 service team is available Monday to Saturday from 9 AM to 6 PM IST.",
            ),
            &[
                "What are your business hours?",
                "Do you have a customer support chat?",
                "How can I schedule a meeting?",
            ],
        )
        .with_page("contact"),
        KnowledgeEntry::new(
            "account",
            &[
                "account", "login", "password", "sign up", "register", "profile", "forgot",
                "reset", "credentials", "email", "personal information",
            ],
            literal(
                "You can create an account or login from the user icon in the top navigation \
                 bar. This will allow you to track orders, save favorite products, and expedite \
                 checkout. If you've forgotten your password, use the 'Forgot Password' link on \
                 the login page.",
            ),
            &[
                "How do I reset my password?",
                "What are the benefits of creating an account?",
                "Is my personal information secure?",
            ],
        ),
        KnowledgeEntry::new(
            "sustainability",
            &[
                "eco", "sustainable", "environment", "green", "recycled", "planet", "organic",
                "carbon", "footprint", "responsible", "ethical", "conservation",
            ],
            literal(
                "Sustainability is at the core of our values. We use eco-friendly manufacturing \
                 processes and offer a range of recycled and organic yarn options. Our factory \
                 employs water conservation methods, solar power, and waste reduction practices. \
                 We're certified by global sustainability standards and continuously work to \
                 improve our environmental impact.",
            ),
            &[
                "What sustainability certifications do you have?",
                "How do you recycle yarns?",
                "What's your carbon footprint reduction strategy?",
            ],
        )
        .with_page("sustainability"),
        KnowledgeEntry::new(
            "company",
            &[
                "company", "about", "history", "background", "founded", "who are you", "spindle",
                "mission", "vision", "values", "team", "establishment",
            ],
            literal(
                "Spindle Yarns was established in 2005 with a mission to provide premium quality \
                 yarns while embracing sustainable practices. We've grown from a small local \
                 supplier to an international yarn manufacturer known for quality, innovation, \
                 and environmental responsibility. Our team includes experienced textile \
                 engineers and quality control experts committed to excellence.",
            ),
            &[
                "Who founded Spindle Yarns?",
                "What is your company's mission?",
                "How many employees do you have?",
            ],
        )
        .with_page("about"),
        KnowledgeEntry::new(
            "wholesale",
            &[
                "wholesale", "bulk", "large order", "business", "quantity", "distributor",
                "reseller", "commercial", "partner", "collaboration", "b2b",
            ],
            literal(
                "We offer competitive wholesale pricing for bulk orders. Our minimum order \
                 quantity varies by product type. Please contact our business development team \
                 at support@spindleyarns.in with details of your requirements for a customized \
                 quote. We offer special terms for long-term business relationships.",
            ),
            &[
                "What are your wholesale terms?",
                "Do you offer partnership programs?",
                "Can I become a distributor?",
            ],
        ),
        KnowledgeEntry::new(
            "specifications",
            &[
                "specification", "technical", "details", "count", "thickness", "strength",
                "quality", "parameters", "characteristics", "property", "standard",
            ],
            literal(
                "Our yarns come in various specifications including different counts (Ne), twist \
                 levels, and strength parameters. Each product page lists detailed \
                 specifications. For customized specifications, please contact our technical \
                 team. We can provide lab reports and quality certificates upon request.",
            ),
            &[
                "What yarn counts do you offer?",
                "Can you provide technical data sheets?",
                "What testing standards do you follow?",
            ],
        ),
        KnowledgeEntry::new(
            "care",
            &[
                "care", "wash", "maintain", "instruc", "clean", "storage", "preserve", "handle",
                "quality", "longevity", "deteriorate",
            ],
            literal(
                "For optimal yarn storage, keep in a cool, dry place away from direct sunlight. \
                 Most yarns should be stored in their original packaging or airtight containers \
                 to prevent dust accumulation and moisture damage. Different yarn types may have \
                 specific care requirements which are provided with your purchase. For detailed \
                 care instructions for a specific product, please refer to the product \
                 information sheet.",
            ),
            &[],
        ),
        KnowledgeEntry::new(
            "order",
            &[
                "order", "status", "track", "placed", "processing", "confirm", "cancel",
                "modify", "change", "update", "timeline", "progress",
            ],
            literal(
                "You can track your order status by logging into your account and viewing \
                 'Order History'. Alternatively, use the tracking number provided in your \
                 shipping confirmation email. If you need to modify an order, please contact \
                 customer service immediately as changes may only be possible before shipping. \
                 For order cancellations, please refer to our cancellation policy on the \
                 website.",
            ),
            &[
                "How long does shipping take?",
                "Can I modify my order after placing it?",
                "What's your cancellation policy?",
            ],
        ),
        KnowledgeEntry::new(
            "order_placement",
            &[
                "place order", "place an order", "buy", "purchase", "checkout", "ordering",
                "how to order", "make order", "ordering process", "how can i order",
                "how do i place",
            ],
            literal(
                "Placing an order with us is easy! You can order through our website by \
                 selecting your desired yarns, adding them to your cart, and proceeding to \
                 checkout. For bulk or custom orders, you can also email us at \
                 support@spindleyarns.in or call us at +91 99940 11223. Our team will guide you \
                 through the ordering process and provide you with a detailed quote. We require \
                 minimum order quantities for certain yarn types, so please check product \
                 specifications or contact us for details.",
            ),
            &[
                "What payment methods do you accept?",
                "What's your minimum order quantity?",
                "How long will delivery take?",
            ],
        ),
        KnowledgeEntry::new(
            "custom",
            &[
                "custom", "personalize", "specific", "special", "unique", "tailor", "bespoke",
                "design", "requirement", "particular", "exclusive",
            ],
            literal(
                "We offer custom yarn development services tailored to your specific \
                 requirements. This includes customized blends, counts, colors, and finishing \
                 options. Custom orders typically require a minimum quantity and development \
                 time. Please contact our product development team with your specifications, and \
                 we'll work with you to create the perfect yarn for your needs.",
            ),
            &[],
        ),
        KnowledgeEntry::new(
            "certification",
            &[
                "certif", "standard", "quality", "iso", "compliance", "test", "audit",
                "approval", "regulation", "authority", "verified",
            ],
            literal(
                "Our yarns meet international quality standards and are certified by \
                 organizations like OEKO-TEX, GOTS, and GRS for our organic and recycled \
                 products. We maintain ISO 9001 for quality management and ISO 14001 for \
                 environmental management systems. All our certificates are available upon \
                 request, and key certifications are displayed on our product pages.",
            ),
            &[],
        ),
        KnowledgeEntry::new(
            "payment",
            &[
                "payment", "pay", "method", "credit", "debit", "card", "bank", "transfer",
                "upi", "online", "transaction", "secure", "option",
            ],
            literal(
                "We accept multiple payment methods including credit/debit cards, bank \
                 transfers, UPI, and international payment systems. All online transactions are \
                 secured with industry-standard encryption. For large orders, we also offer \
                 letter of credit and other B2B payment options. Contact our finance team for \
                 special payment arrangements or questions regarding transactions.",
            ),
            &[],
        ),
        KnowledgeEntry::new(
            "location",
            &[
                "location", "factory", "mill", "office", "address", "visit", "facility",
                "headquarter", "site", "place", "direction", "map",
            ],
            literal(
                "Our main facility and office is located at 27-4 Mill Road, Karur Sukkaliyur, \
                 Tamil Nadu, India. We welcome factory visits by appointment. Please contact us \
                 at support@spindleyarns.in to schedule a visit. We also have distribution \
                 centers in major textile hubs across India and representative offices in select \
                 international locations.",
            ),
            &[],
        ),
        KnowledgeEntry::new(
            "trends",
            &[
                "trend", "fashion", "popular", "latest", "season", "upcoming", "modern",
                "style", "design", "forecast", "industry",
            ],
            literal(
                "The current yarn trends include sustainable fibers, textured yarns, and \
                 natural dyes. We stay updated with global textile trends and regularly \
                 introduce new products aligned with market demands. Our R&D team works closely \
                 with fashion forecasters to anticipate upcoming trends in the textile industry.",
            ),
            &[
                "What colors are trending this season?",
                "How do you predict yarn trends?",
                "Do you offer trendy specialty yarns?",
            ],
        ),
        KnowledgeEntry::new(
            "samples",
            &[
                "sample", "test", "try", "before", "small", "quantity", "trial", "evaluation",
                "quality check",
            ],
            literal(
                "We offer sample cards and small quantity samples for quality evaluation before \
                 bulk orders. Standard samples are available for a nominal fee which is credited \
                 towards your first order. For custom samples, please contact our sales team \
                 with your specific requirements and intended application.",
            ),
            &[
                "How can I order a sample?",
                "Is there a fee for samples?",
                "How long does sample delivery take?",
            ],
        ),
        KnowledgeEntry::new(
            "colors",
            &[
                "color", "shade", "dye", "tone", "hue", "pantone", "match", "palette", "range",
                "options",
            ],
            literal(
                "We offer yarns in a wide range of standard colors as well as custom color \
                 matching services. Our in-house dyeing facilities can match specific Pantone \
                 colors or your provided samples. We maintain color consistency across batches \
                 and offer color fastness guarantees for our dyed yarns.",
            ),
            &[
                "Can you match specific Pantone colors?",
                "What's your color consistency policy?",
                "Do you offer natural dyed yarns?",
            ],
        ),
        KnowledgeEntry::new(
            "production",
            &[
                "production", "manufacturing", "make", "process", "facility", "machine",
                "technology", "equipment", "capacity",
            ],
            literal(
                "Our state-of-the-art manufacturing facilities use modern technology for yarn \
                 production. Our processes include blowroom, carding, drawing, roving, ring \
                 spinning, open-end spinning, and post-spinning processes. We have a monthly \
                 production capacity of approximately 500 tons and employ strict quality control \
                 at every stage of production.",
            ),
            &[
                "What spinning technologies do you use?",
                "What's your production capacity?",
                "Can I visit your production facility?",
            ],
        ),
        KnowledgeEntry::new(
            "quality",
            &[
                "quality", "standard", "testing", "check", "control", "assurance",
                "inspection", "consistency", "defect",
            ],
            literal(
                "Quality is our priority. We implement a comprehensive quality management \
                 system with testing at every production stage. Our yarns undergo rigorous \
                 tests for count, strength, elongation, evenness, imperfections, and hairiness. \
                 We use advanced testing equipment and follow international testing standards.",
            ),
            &[
                "What quality tests do you perform?",
                "Do you follow international quality standards?",
                "How do you ensure batch consistency?",
            ],
        ),
        KnowledgeEntry::new(
            "innovation",
            &[
                "innovation", "research", "development", "new", "technology", "advance",
                "future", "improvement", "r&d",
            ],
            literal(
                "Innovation drives our business forward. Our R&D department continuously \
                 explores new yarn technologies, sustainable processing methods, and \
                 performance-enhancing treatments. We invest in research partnerships with \
                 textile institutions and regularly upgrade our manufacturing technology to \
                 stay at the forefront of yarn innovation.",
            ),
            &[
                "What are your latest innovations?",
                "Do you develop custom yarn solutions?",
                "How much do you invest in R&D?",
            ],
        ),
        KnowledgeEntry::new(
            "applications",
            &[
                "application", "use", "suitable", "purpose", "ideal", "recommend", "best for",
                "intended", "usage",
            ],
            literal(
                "Our yarns are suitable for various applications including apparel, home \
                 textiles, technical textiles, and industrial uses. We can recommend specific \
                 yarn types based on your end product requirements. Each product in our catalog \
                 includes recommended applications to help you choose the right yarn for your \
                 project.",
            ),
            &[
                "Which yarns are best for knitting?",
                "Do you have yarns for technical textiles?",
                "What yarns do you recommend for sportswear?",
            ],
        ),
        KnowledgeEntry::new(
            "greeting",
            &[
                "hi", "hello", "hey", "greetings", "good morning", "good afternoon",
                "good evening", "howdy", "sup", "yo", "hiya",
            ],
            Response::Templated(Template::Greeting),
            &[
                "What products do you offer?",
                "Can you tell me about your company?",
                "How can I place an order?",
            ],
        ),
        KnowledgeEntry::new(
            "thanks",
            &["thank", "thanks", "appreciate", "grateful", "helpful"],
            literal(
                "You're welcome! I'm happy I could help. Is there anything else you'd like to \
                 know about our yarns or services?",
            ),
            &[
                "Tell me about your sustainability practices",
                "What are your bestselling products?",
                "How can I contact your team?",
            ],
        ),
        KnowledgeEntry::new(
            "goodbye",
            &["bye", "goodbye", "see you", "farewell", "end"],
            literal(
                "Thank you for chatting with the Spindle Yarns assistant. Feel free to return \
                 anytime you have questions. Have a great day!",
            ),
            &[
                "Before I go, how can I place an order?",
                "Can I get a product catalog?",
                "What are your contact details?",
            ],
        ),
        KnowledgeEntry::new(
            "general",
            &[
                "how are you", "what's up", "how's it going", "whats happening",
                "how do you work", "who are you",
            ],
            Response::Templated(Template::AboutAssistant),
            &[
                "Tell me about your company",
                "What products do you specialize in?",
                "How can you help me today?",
            ],
        ),
        KnowledgeEntry::new(
            "help",
            &[
                "help", "assist", "support", "guide", "explain", "show me", "how to use",
                "what can you do",
            ],
            literal(
                "I can help you with information about our products, ordering process, \
                 shipping details, company information, and more. You can ask me specific \
                 questions, and I'll do my best to assist you. You can also click on the \
                 suggested questions below for quick answers.",
            ),
            &[
                "What products do you offer?",
                "How do I place an order?",
                "Tell me about your yarn quality",
            ],
        ),
        KnowledgeEntry::new(
            "name",
            &[
                "your name", "who are you", "what are you called", "what should I call you",
            ],
            literal(
                "I'm the Spindle Yarns assistant, here to help you with information about our \
                 yarns and services. You can think of me as your personal guide to everything \
                 Spindle Yarns offers. What would you like to know?",
            ),
            &[
                "What can you help me with?",
                "Tell me about Spindle Yarns",
                "What products do you offer?",
            ],
        ),
        KnowledgeEntry::new(
            "cancellation",
            &[
                "cancel", "cancle", "cancell", "canel", "cancellation", "stop order",
                "don't want", "oredr", "ordr",
            ],
            literal(
                "To cancel your order, please contact our customer service team as soon as \
                 possible at support@spindleyarns.in or call +91 99940 11223. Orders can \
                 typically be cancelled if they haven't entered the shipping process. Please \
                 provide your order number and contact information. If your order has already \
                 shipped, you may need to follow our return process instead.",
            ),
            &[
                "What's your return policy?",
                "How do I track my order status?",
                "Can I get a refund for cancelled orders?",
            ],
        )
        .with_detail(
            "To cancel an order, contact our customer service team as soon as possible. Orders \
             can typically be cancelled if they haven't entered the shipping process. Please \
             provide your order number and contact information. If your order has already \
             shipped, you may need to follow our return process instead.",
        ),
        KnowledgeEntry::new(
            "cotton_yarns",
            &[
                "cotton", "organic cotton", "recycled cotton", "combed cotton", "carded cotton",
            ],
            literal(
                "Our cotton yarn range includes organic, recycled, combed, and carded variants \
                 from Ne 4 to Ne 80. These are perfect for apparel, home textiles, and various \
                 industrial applications. Our cotton yarns are known for their consistency, \
                 strength, and excellent dyeing properties. We also offer GOTS certified \
                 organic cotton yarns for eco-conscious projects.",
            ),
            &[
                "What's the difference between combed and carded cotton?",
                "Are your organic cotton yarns certified?",
                "What are the most popular cotton yarn counts?",
            ],
        )
        .with_detail(
            "Our cotton yarn range includes organic cotton, recycled cotton, combed cotton, and \
             carded cotton variants. We offer counts from Ne 4 to Ne 80, suitable for apparel, \
             home textiles, and industrial applications. All our cotton yarns meet international \
             quality standards and are available with various certifications including GOTS for \
             organic cotton.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "polyester_yarns",
            &[
                "polyester", "virgin polyester", "recycled polyester", "textured polyester",
            ],
            literal(
                "We offer virgin polyester, recycled polyester, and textured polyester yarns in \
                 counts from Ne 10 to Ne 60. These are perfect for technical textiles, \
                 sportswear, and industrial applications. Our recycled polyester yarns carry GRS \
                 certification and provide excellent strength, abrasion resistance, and \
                 colorfastness while reducing environmental impact.",
            ),
            &[
                "What are the benefits of recycled polyester?",
                "How does textured polyester differ from regular polyester?",
                "What applications are polyester yarns best suited for?",
            ],
        )
        .with_detail(
            "Our polyester yarn collection includes virgin polyester, recycled polyester, and \
             textured polyester options. Available in counts from Ne 10 to Ne 60, these yarns \
             are ideal for technical textiles, sportswear, and industrial fabrics. Our recycled \
             polyester yarns are GRS certified and offer the same performance as virgin \
             polyester with reduced environmental impact.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "blended_yarns",
            &[
                "blend", "blended", "poly-cotton", "cotton-viscose", "specialty blend",
            ],
            literal(
                "We manufacture various blended yarns including poly-cotton, cotton-viscose, \
                 and specialty blends in counts from Ne 6 to Ne 50. Our blends combine the \
                 strengths of different fibers - for example, our poly-cotton blends offer the \
                 comfort of cotton with the durability of polyester. Common blend ratios \
                 include 65/35, 50/50, and 60/40 polyester/cotton, perfect for apparel and home \
                 textiles.",
            ),
            &[
                "What are the advantages of blended yarns?",
                "What's your most popular blend ratio?",
                "Can you create custom blends?",
            ],
        )
        .with_detail(
            "Our blended yarn selection includes poly-cotton blends, cotton-viscose blends, and \
             specialty blends in counts from Ne 6 to Ne 50. These yarns combine the best \
             properties of different fibers for versatile applications across apparel and home \
             textiles. Common blend ratios include 65/35, 50/50, and 60/40 polyester/cotton.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "specialty_yarns",
            &["specialty", "melange", "slub", "fancy", "core-spun"],
            literal(
                "Our specialty yarns include melange, slub, fancy, and core-spun varieties \
                 designed for fashion-forward applications. Melange yarns create heathered \
                 effects, slub yarns add texture, fancy yarns provide unique visual interest, \
                 and core-spun yarns offer special performance characteristics. These specialty \
                 products are perfect for premium fashion apparel and distinctive textile \
                 products.",
            ),
            &[
                "How are melange yarns different from regular yarns?",
                "What effects can I achieve with slub yarns?",
                "Do you offer custom specialty yarn development?",
            ],
        )
        .with_detail(
            "Our specialty yarn line features melange yarns, slub yarns, fancy yarns, and \
             core-spun yarns designed for fashion apparel and premium textiles. These yarns \
             offer unique aesthetic and functional properties, creating distinctive fabrics \
             with character and appeal. Our specialty yarns are produced using advanced \
             technologies to ensure consistent quality.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "spinning_technologies",
            &[
                "spinning", "technology", "ring spinning", "open-end", "oe spinning",
                "vortex spinning", "manufacturing process",
            ],
            literal(
                "We utilize three primary spinning technologies: Ring Spinning produces premium \
                 yarns with excellent strength and softness, ideal for fine fabrics. Open-End \
                 (OE) Spinning is cost-effective for medium to coarse counts with good \
                 uniformity. Vortex Spinning creates yarns with minimal hairiness and superior \
                 abrasion resistance, perfect for performance fabrics. Each technology offers \
                 distinct advantages for different end applications.",
            ),
            &[
                "Which spinning method produces the strongest yarns?",
                "What count ranges can you produce with each technology?",
                "How do I choose the right spinning method for my project?",
            ],
        )
        .with_detail(
            "We employ multiple spinning technologies including Ring Spinning, Open-End \
             Spinning, and Vortex Spinning. Ring spinning produces high-quality yarns with \
             excellent strength and softness. Open-End spinning offers cost-effective \
             production for coarser counts. Vortex spinning creates yarns with low hairiness \
             and good abrasion resistance.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "certifications",
            &[
                "certif", "standard", "quality", "iso", "gots", "grs", "oeko-tex",
                "compliance", "test", "audit", "approval", "regulation", "authority", "verified",
            ],
            literal(
                "Our yarns meet international quality standards and are certified by \
                 organizations like OEKO-TEX, GOTS, and GRS for our organic and recycled \
                 products. We maintain ISO 9001 for quality management and ISO 14001 for \
                 environmental management systems. All our certificates are available upon \
                 request, and key certifications are displayed on our product pages.",
            ),
            &[
                "What does the GOTS certification cover?",
                "How often are your facilities audited for certifications?",
                "Can you provide certification documentation with orders?",
            ],
        )
        .with_detail(
            "Our yarns are certified by leading organizations including GOTS (for organic \
             yarns), GRS (for recycled content), OEKO-TEX Standard 100 (for harmful substances \
             testing), ISO 9001 (quality management), and ISO 14001 (environmental management). \
             These certifications ensure our products meet international standards for quality, \
             sustainability, and safety.",
        )
        .with_page("products"),
        KnowledgeEntry::new(
            "company_history",
            &[
                "history", "background", "journey", "story", "founded", "establishment",
                "beginning", "started",
            ],
            literal(
                "Spindle Yarns was established in 2005 as a small trading business in Karur and \
                 has grown into a leading yarn manufacturer. Our journey includes establishing \
                 our first manufacturing facility in 2008, launching recycled yarns in 2015, \
                 expanding internationally in 2018, and opening our state-of-the-art facility \
                 in 2022. Throughout our history, we've maintained a commitment to quality, \
                 sustainability, and innovation in the textile industry.",
            ),
            &[
                "Who founded Spindle Yarns?",
                "How has your product range evolved over the years?",
                "What was your first international market?",
            ],
        )
        .with_detail(
            "Founded in 2005, Spindle Yarns began as a small yarn trading business in Karur, \
             Tamil Nadu. Over the years, we've grown into a leading manufacturer with \
             state-of-the-art facilities. Key milestones include establishing our first \
             manufacturing facility in 2008, achieving ISO 9001 certification in 2012, \
             launching our recycled yarn line in 2015, expanding to international markets in \
             2018, obtaining GOTS and GRS certifications in 2020, and inaugurating our new \
             state-of-the-art facility in 2022.",
        )
        .with_page("about"),
        KnowledgeEntry::new(
            "mission_vision",
            &[
                "mission", "vision", "goals", "aim", "purpose", "objective", "aspiration",
            ],
            literal(
                "Our mission is to provide premium quality yarns while embracing sustainable \
                 practices and continuous innovation. Our vision is to become the global leader \
                 in sustainable yarn manufacturing through technological excellence and a \
                 customer-centric approach. These principles guide everything we do, from \
                 product development to customer service, as we strive to exceed expectations \
                 while minimizing environmental impact.",
            ),
            &[
                "How do you implement your values in daily operations?",
                "What innovations are you currently working on?",
                "How do you measure customer satisfaction?",
            ],
        )
        .with_detail(
            "Our mission is to provide premium quality yarns while embracing sustainable \
             practices and continuous innovation. Our vision is to become the global leader in \
             sustainable yarn manufacturing through technological excellence and a \
             customer-centric approach. Our core values include Quality, Sustainability, \
             Innovation, Integrity, and Customer Satisfaction.",
        )
        .with_page("about"),
        KnowledgeEntry::new(
            "sustainability_initiatives",
            &[
                "sustainability", "eco", "environment", "green", "sustainable", "initiative",
                "program", "conservation", "responsible",
            ],
            literal(
                "Sustainability is at the core of our values. We use eco-friendly \
                 manufacturing processes and offer a range of recycled and organic yarn \
                 options. Our factory employs water conservation methods, solar power, and \
                 waste reduction practices. We're certified by global sustainability standards \
                 and continuously work to improve our environmental impact.",
            ),
            &[
                "What sustainability certifications do you have?",
                "How do you recycle yarns?",
                "What's your carbon footprint reduction strategy?",
            ],
        )
        .with_detail(
            "Our sustainability initiatives include solar-powered manufacturing facilities, \
             water recycling and conservation systems, zero-waste manufacturing processes, \
             organic and recycled raw material sourcing, and energy-efficient machinery. We \
             hold certifications including GOTS, GRS, ISO 14001, and OEKO-TEX Standard 100. \
             Our goals include achieving carbon neutrality by 2030, 100% renewable energy \
             usage, zero landfill waste by 2025, and reducing water consumption by 50% by \
             2028.",
        )
        .with_page("sustainability"),
        KnowledgeEntry::new(
            "contact_details",
            &[
                "contact", "reach", "email", "phone", "call", "address", "location", "office",
                "factory", "headquarters",
            ],
            literal(
                "You can reach our team at support@spindleyarns.in or call us at +91 99940 \
                 11223. Our offices are located at 27-4 Mill Road, Karur Sukkaliyur. Our \
                 customer service team is available Monday to Saturday from 9 AM to 6 PM IST.",
            ),
            &[
                "What are your business hours?",
                "Do you have a customer support chat?",
                "How can I schedule a meeting?",
            ],
        )
        .with_detail(
            "Our main facility and office is located at 27-4 Mill Road, Karur Sukkaliyur, \
             Tamil Nadu, India. You can contact us via email at support@spindleyarns.in or \
             call us at +91 99940 11223. Our business hours are Monday to Saturday from 9 AM \
             to 6 PM IST. We're also active on social media platforms.",
        )
        .with_page("contact"),
    ]
}
