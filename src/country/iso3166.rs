//! ISO 3166-1 reference data.
//!
//! `(alpha-2, name, common name, official name)`. Names follow the iso-codes
//! database used by common country-lookup libraries.

pub(super) const COUNTRIES: &[(&str, &str, Option<&str>, Option<&str>)] = &[
    ("AW", "Aruba", None, None),
    ("AF", "Afghanistan", None, Some("Islamic Republic of Afghanistan")),
    ("AO", "Angola", None, Some("Republic of Angola")),
    ("AI", "Anguilla", None, None),
    ("AX", "Åland Islands", None, None),
    ("AL", "Albania", None, Some("Republic of Albania")),
    ("AD", "Andorra", None, Some("Principality of Andorra")),
    ("AE", "United Arab Emirates", None, None),
    ("AR", "Argentina", None, Some("Argentine Republic")),
    ("AM", "Armenia", None, Some("Republic of Armenia")),
    ("AS", "American Samoa", None, None),
    ("AQ", "Antarctica", None, None),
    ("TF", "French Southern Territories", None, None),
    ("AG", "Antigua and Barbuda", None, None),
    ("AU", "Australia", None, None),
    ("AT", "Austria", None, Some("Republic of Austria")),
    ("AZ", "Azerbaijan", None, Some("Republic of Azerbaijan")),
    ("BI", "Burundi", None, Some("Republic of Burundi")),
    ("BE", "Belgium", None, Some("Kingdom of Belgium")),
    ("BJ", "Benin", None, Some("Republic of Benin")),
    ("BQ", "Bonaire, Sint Eustatius and Saba", None, Some("Bonaire, Sint Eustatius and Saba")),
    ("BF", "Burkina Faso", None, None),
    ("BD", "Bangladesh", None, Some("People's Republic of Bangladesh")),
    ("BG", "Bulgaria", None, Some("Republic of Bulgaria")),
    ("BH", "Bahrain", None, Some("Kingdom of Bahrain")),
    ("BS", "Bahamas", None, Some("Commonwealth of the Bahamas")),
    ("BA", "Bosnia and Herzegovina", None, Some("Republic of Bosnia and Herzegovina")),
    ("BL", "Saint Barthélemy", None, None),
    ("BY", "Belarus", None, Some("Republic of Belarus")),
    ("BZ", "Belize", None, None),
    ("BM", "Bermuda", None, None),
    ("BO", "Bolivia, Plurinational State of", Some("Bolivia"), Some("Plurinational State of Bolivia")),
    ("BR", "Brazil", None, Some("Federative Republic of Brazil")),
    ("BB", "Barbados", None, None),
    ("BN", "Brunei Darussalam", None, None),
    ("BT", "Bhutan", None, Some("Kingdom of Bhutan")),
    ("BV", "Bouvet Island", None, None),
    ("BW", "Botswana", None, Some("Republic of Botswana")),
    ("CF", "Central African Republic", None, None),
    ("CA", "Canada", None, None),
    ("CC", "Cocos (Keeling) Islands", None, None),
    ("CH", "Switzerland", None, Some("Swiss Confederation")),
    ("CL", "Chile", None, Some("Republic of Chile")),
    ("CN", "China", None, Some("People's Republic of China")),
    ("CI", "Côte d'Ivoire", None, Some("Republic of Côte d'Ivoire")),
    ("CM", "Cameroon", None, Some("Republic of Cameroon")),
    ("CD", "Congo, The Democratic Republic of the", None, None),
    ("CG", "Congo", None, Some("Republic of the Congo")),
    ("CK", "Cook Islands", None, None),
    ("CO", "Colombia", None, Some("Republic of Colombia")),
    ("KM", "Comoros", None, Some("Union of the Comoros")),
    ("CV", "Cabo Verde", None, Some("Republic of Cabo Verde")),
    ("CR", "Costa Rica", None, Some("Republic of Costa Rica")),
    ("CU", "Cuba", None, Some("Republic of Cuba")),
    ("CW", "Curaçao", None, Some("Curaçao")),
    ("CX", "Christmas Island", None, None),
    ("KY", "Cayman Islands", None, None),
    ("CY", "Cyprus", None, Some("Republic of Cyprus")),
    ("CZ", "Czechia", None, Some("Czech Republic")),
    ("DE", "Germany", None, Some("Federal Republic of Germany")),
    ("DJ", "Djibouti", None, Some("Republic of Djibouti")),
    ("DM", "Dominica", None, Some("Commonwealth of Dominica")),
    ("DK", "Denmark", None, Some("Kingdom of Denmark")),
    ("DO", "Dominican Republic", None, None),
    ("DZ", "Algeria", None, Some("People's Democratic Republic of Algeria")),
    ("EC", "Ecuador", None, Some("Republic of Ecuador")),
    ("EG", "Egypt", None, Some("Arab Republic of Egypt")),
    ("ER", "Eritrea", None, Some("the State of Eritrea")),
    ("EH", "Western Sahara", None, None),
    ("ES", "Spain", None, Some("Kingdom of Spain")),
    ("EE", "Estonia", None, Some("Republic of Estonia")),
    ("ET", "Ethiopia", None, Some("Federal Democratic Republic of Ethiopia")),
    ("FI", "Finland", None, Some("Republic of Finland")),
    ("FJ", "Fiji", None, Some("Republic of Fiji")),
    ("FK", "Falkland Islands (Malvinas)", None, None),
    ("FR", "France", None, Some("French Republic")),
    ("FO", "Faroe Islands", None, None),
    ("FM", "Micronesia, Federated States of", None, Some("Federated States of Micronesia")),
    ("GA", "Gabon", None, Some("Gabonese Republic")),
    ("GB", "United Kingdom", None, Some("United Kingdom of Great Britain and Northern Ireland")),
    ("GE", "Georgia", None, None),
    ("GG", "Guernsey", None, None),
    ("GH", "Ghana", None, Some("Republic of Ghana")),
    ("GI", "Gibraltar", None, None),
    ("GN", "Guinea", None, Some("Republic of Guinea")),
    ("GP", "Guadeloupe", None, None),
    ("GM", "Gambia", None, Some("Republic of the Gambia")),
    ("GW", "Guinea-Bissau", None, Some("Republic of Guinea-Bissau")),
    ("GQ", "Equatorial Guinea", None, Some("Republic of Equatorial Guinea")),
    ("GR", "Greece", None, Some("Hellenic Republic")),
    ("GD", "Grenada", None, None),
    ("GL", "Greenland", None, None),
    ("GT", "Guatemala", None, Some("Republic of Guatemala")),
    ("GF", "French Guiana", None, None),
    ("GU", "Guam", None, None),
    ("GY", "Guyana", None, Some("Republic of Guyana")),
    ("HK", "Hong Kong", None, Some("Hong Kong Special Administrative Region of China")),
    ("HM", "Heard Island and McDonald Islands", None, None),
    ("HN", "Honduras", None, Some("Republic of Honduras")),
    ("HR", "Croatia", None, Some("Republic of Croatia")),
    ("HT", "Haiti", None, Some("Republic of Haiti")),
    ("HU", "Hungary", None, Some("Hungary")),
    ("ID", "Indonesia", None, Some("Republic of Indonesia")),
    ("IM", "Isle of Man", None, None),
    ("IN", "India", None, Some("Republic of India")),
    ("IO", "British Indian Ocean Territory", None, None),
    ("IE", "Ireland", None, None),
    ("IR", "Iran, Islamic Republic of", Some("Iran"), Some("Islamic Republic of Iran")),
    ("IQ", "Iraq", None, Some("Republic of Iraq")),
    ("IS", "Iceland", None, Some("Republic of Iceland")),
    ("IL", "Israel", None, Some("State of Israel")),
    ("IT", "Italy", None, Some("Italian Republic")),
    ("JM", "Jamaica", None, None),
    ("JE", "Jersey", None, None),
    ("JO", "Jordan", None, Some("Hashemite Kingdom of Jordan")),
    ("JP", "Japan", None, None),
    ("KZ", "Kazakhstan", None, Some("Republic of Kazakhstan")),
    ("KE", "Kenya", None, Some("Republic of Kenya")),
    ("KG", "Kyrgyzstan", None, Some("Kyrgyz Republic")),
    ("KH", "Cambodia", None, Some("Kingdom of Cambodia")),
    ("KI", "Kiribati", None, Some("Republic of Kiribati")),
    ("KN", "Saint Kitts and Nevis", None, None),
    ("KR", "Korea, Republic of", Some("South Korea"), None),
    ("KW", "Kuwait", None, Some("State of Kuwait")),
    ("LA", "Lao People's Democratic Republic", Some("Laos"), None),
    ("LB", "Lebanon", None, Some("Lebanese Republic")),
    ("LR", "Liberia", None, Some("Republic of Liberia")),
    ("LY", "Libya", None, Some("Libya")),
    ("LC", "Saint Lucia", None, None),
    ("LI", "Liechtenstein", None, Some("Principality of Liechtenstein")),
    ("LK", "Sri Lanka", None, Some("Democratic Socialist Republic of Sri Lanka")),
    ("LS", "Lesotho", None, Some("Kingdom of Lesotho")),
    ("LT", "Lithuania", None, Some("Republic of Lithuania")),
    ("LU", "Luxembourg", None, Some("Grand Duchy of Luxembourg")),
    ("LV", "Latvia", None, Some("Republic of Latvia")),
    ("MO", "Macao", None, Some("Macao Special Administrative Region of China")),
    ("MF", "Saint Martin (French part)", None, None),
    ("MA", "Morocco", None, Some("Kingdom of Morocco")),
    ("MC", "Monaco", None, Some("Principality of Monaco")),
    ("MD", "Moldova, Republic of", Some("Moldova"), Some("Republic of Moldova")),
    ("MG", "Madagascar", None, Some("Republic of Madagascar")),
    ("MV", "Maldives", None, Some("Republic of Maldives")),
    ("MX", "Mexico", None, Some("United Mexican States")),
    ("MH", "Marshall Islands", None, Some("Republic of the Marshall Islands")),
    ("MK", "North Macedonia", None, Some("Republic of North Macedonia")),
    ("ML", "Mali", None, Some("Republic of Mali")),
    ("MT", "Malta", None, Some("Republic of Malta")),
    ("MM", "Myanmar", None, Some("Republic of Myanmar")),
    ("ME", "Montenegro", None, Some("Montenegro")),
    ("MN", "Mongolia", None, None),
    ("MP", "Northern Mariana Islands", None, Some("Commonwealth of the Northern Mariana Islands")),
    ("MZ", "Mozambique", None, Some("Republic of Mozambique")),
    ("MR", "Mauritania", None, Some("Islamic Republic of Mauritania")),
    ("MS", "Montserrat", None, None),
    ("MQ", "Martinique", None, None),
    ("MU", "Mauritius", None, Some("Republic of Mauritius")),
    ("MW", "Malawi", None, Some("Republic of Malawi")),
    ("MY", "Malaysia", None, None),
    ("YT", "Mayotte", None, None),
    ("NA", "Namibia", None, Some("Republic of Namibia")),
    ("NC", "New Caledonia", None, None),
    ("NE", "Niger", None, Some("Republic of the Niger")),
    ("NF", "Norfolk Island", None, None),
    ("NG", "Nigeria", None, Some("Federal Republic of Nigeria")),
    ("NI", "Nicaragua", None, Some("Republic of Nicaragua")),
    ("NU", "Niue", None, Some("Niue")),
    ("NL", "Netherlands", None, Some("Kingdom of the Netherlands")),
    ("NO", "Norway", None, Some("Kingdom of Norway")),
    ("NP", "Nepal", None, Some("Federal Democratic Republic of Nepal")),
    ("NR", "Nauru", None, Some("Republic of Nauru")),
    ("NZ", "New Zealand", None, None),
    ("OM", "Oman", None, Some("Sultanate of Oman")),
    ("PK", "Pakistan", None, Some("Islamic Republic of Pakistan")),
    ("PA", "Panama", None, Some("Republic of Panama")),
    ("PN", "Pitcairn", None, None),
    ("PE", "Peru", None, Some("Republic of Peru")),
    ("PH", "Philippines", None, Some("Republic of the Philippines")),
    ("PW", "Palau", None, Some("Republic of Palau")),
    ("PG", "Papua New Guinea", None, Some("Independent State of Papua New Guinea")),
    ("PL", "Poland", None, Some("Republic of Poland")),
    ("PR", "Puerto Rico", None, None),
    ("KP", "Korea, Democratic People's Republic of", Some("North Korea"), Some("Democratic People's Republic of Korea")),
    ("PT", "Portugal", None, Some("Portuguese Republic")),
    ("PY", "Paraguay", None, Some("Republic of Paraguay")),
    ("PS", "Palestine, State of", None, Some("the State of Palestine")),
    ("PF", "French Polynesia", None, None),
    ("QA", "Qatar", None, Some("State of Qatar")),
    ("RE", "Réunion", None, None),
    ("RO", "Romania", None, None),
    ("RU", "Russian Federation", None, None),
    ("RW", "Rwanda", None, Some("Rwandese Republic")),
    ("SA", "Saudi Arabia", None, Some("Kingdom of Saudi Arabia")),
    ("SD", "Sudan", None, Some("Republic of the Sudan")),
    ("SN", "Senegal", None, Some("Republic of Senegal")),
    ("SG", "Singapore", None, Some("Republic of Singapore")),
    ("GS", "South Georgia and the South Sandwich Islands", None, None),
    ("SH", "Saint Helena, Ascension and Tristan da Cunha", None, None),
    ("SJ", "Svalbard and Jan Mayen", None, None),
    ("SB", "Solomon Islands", None, None),
    ("SL", "Sierra Leone", None, Some("Republic of Sierra Leone")),
    ("SV", "El Salvador", None, Some("Republic of El Salvador")),
    ("SM", "San Marino", None, Some("Republic of San Marino")),
    ("SO", "Somalia", None, Some("Federal Republic of Somalia")),
    ("PM", "Saint Pierre and Miquelon", None, None),
    ("RS", "Serbia", None, Some("Republic of Serbia")),
    ("SS", "South Sudan", None, Some("Republic of South Sudan")),
    ("ST", "Sao Tome and Principe", None, Some("Democratic Republic of Sao Tome and Principe")),
    ("SR", "Suriname", None, Some("Republic of Suriname")),
    ("SK", "Slovakia", None, Some("Slovak Republic")),
    ("SI", "Slovenia", None, Some("Republic of Slovenia")),
    ("SE", "Sweden", None, Some("Kingdom of Sweden")),
    ("SZ", "Eswatini", None, Some("Kingdom of Eswatini")),
    ("SX", "Sint Maarten (Dutch part)", None, Some("Sint Maarten (Dutch part)")),
    ("SC", "Seychelles", None, Some("Republic of Seychelles")),
    ("SY", "Syrian Arab Republic", Some("Syria"), None),
    ("TC", "Turks and Caicos Islands", None, None),
    ("TD", "Chad", None, Some("Republic of Chad")),
    ("TG", "Togo", None, Some("Togolese Republic")),
    ("TH", "Thailand", None, Some("Kingdom of Thailand")),
    ("TJ", "Tajikistan", None, Some("Republic of Tajikistan")),
    ("TK", "Tokelau", None, None),
    ("TM", "Turkmenistan", None, None),
    ("TL", "Timor-Leste", None, Some("Democratic Republic of Timor-Leste")),
    ("TO", "Tonga", None, Some("Kingdom of Tonga")),
    ("TT", "Trinidad and Tobago", None, Some("Republic of Trinidad and Tobago")),
    ("TN", "Tunisia", None, Some("Republic of Tunisia")),
    ("TR", "Türkiye", None, Some("Republic of Türkiye")),
    ("TV", "Tuvalu", None, None),
    ("TW", "Taiwan, Province of China", Some("Taiwan"), Some("Taiwan, Province of China")),
    ("TZ", "Tanzania, United Republic of", Some("Tanzania"), Some("United Republic of Tanzania")),
    ("UG", "Uganda", None, Some("Republic of Uganda")),
    ("UA", "Ukraine", None, None),
    ("UM", "United States Minor Outlying Islands", None, None),
    ("UY", "Uruguay", None, Some("Eastern Republic of Uruguay")),
    ("US", "United States", None, Some("United States of America")),
    ("UZ", "Uzbekistan", None, Some("Republic of Uzbekistan")),
    ("VA", "Holy See (Vatican City State)", None, None),
    ("VC", "Saint Vincent and the Grenadines", None, None),
    ("VE", "Venezuela, Bolivarian Republic of", Some("Venezuela"), Some("Bolivarian Republic of Venezuela")),
    ("VG", "Virgin Islands, British", None, Some("British Virgin Islands")),
    ("VI", "Virgin Islands, U.S.", None, Some("Virgin Islands of the United States")),
    ("VN", "Viet Nam", Some("Vietnam"), Some("Socialist Republic of Viet Nam")),
    ("VU", "Vanuatu", None, Some("Republic of Vanuatu")),
    ("WF", "Wallis and Futuna", None, None),
    ("WS", "Samoa", None, Some("Independent State of Samoa")),
    ("YE", "Yemen", None, Some("Republic of Yemen")),
    ("ZA", "South Africa", None, Some("Republic of South Africa")),
    ("ZM", "Zambia", None, Some("Republic of Zambia")),
    ("ZW", "Zimbabwe", None, Some("Republic of Zimbabwe")),
];
